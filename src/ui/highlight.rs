//! Editor syntax highlighting
//!
//! A small single-pass scanner that classifies keywords, string literals,
//! comments and numbers for each editor mode. It never fails: text it does
//! not understand is left plain. Span offsets are byte offsets into the
//! scanned text and always fall on `char` boundaries.

use crate::models::SyntaxMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Keyword,
    String,
    Comment,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "false", "finally", "for", "from", "function",
    "if", "import", "in", "instanceof", "let", "new", "null", "of", "return", "switch", "this",
    "throw", "true", "try", "typeof", "undefined", "var", "void", "while", "yield",
];

const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "boolean", "declare", "enum", "implements", "interface", "keyof",
    "namespace", "never", "number", "private", "protected", "public", "readonly", "string",
    "type", "unknown",
];

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "false", "for", "func", "go", "goto", "if", "import", "interface", "map", "nil", "package",
    "range", "return", "select", "struct", "switch", "true", "type", "var",
];

const PHP_KEYWORDS: &[&str] = &[
    "array", "as", "catch", "class", "echo", "else", "elseif", "false", "for", "foreach",
    "function", "if", "include", "namespace", "new", "null", "print", "private", "protected",
    "public", "require", "return", "static", "throw", "true", "try", "use", "while",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "char", "class", "const", "continue", "delete", "do",
    "double", "else", "false", "float", "for", "if", "include", "int", "long", "namespace",
    "new", "nullptr", "override", "private", "protected", "public", "return", "short",
    "signed", "static", "std", "struct", "switch", "template", "true", "typename", "unsigned",
    "using", "virtual", "void", "while",
];

/// Lexical rules for one editor mode
struct Rules {
    keywords: &'static [&'static str],
    extra_keywords: &'static [&'static str],
    hash_comments: bool,
    slash_comments: bool,
    quotes: &'static [u8],
}

impl Rules {
    fn for_mode(mode: SyntaxMode) -> Self {
        fn rules(
            keywords: &'static [&'static str],
            hash_comments: bool,
            slash_comments: bool,
            quotes: &'static [u8],
        ) -> Rules {
            Rules {
                keywords,
                extra_keywords: &[],
                hash_comments,
                slash_comments,
                quotes,
            }
        }

        match mode {
            SyntaxMode::Python => rules(PYTHON_KEYWORDS, true, false, b"\"'"),
            SyntaxMode::JavaScript => rules(JAVASCRIPT_KEYWORDS, false, true, b"\"'`"),
            SyntaxMode::TypeScript => Rules {
                extra_keywords: TYPESCRIPT_KEYWORDS,
                ..rules(JAVASCRIPT_KEYWORDS, false, true, b"\"'`")
            },
            SyntaxMode::Go => rules(GO_KEYWORDS, false, true, b"\"'`"),
            SyntaxMode::Php => rules(PHP_KEYWORDS, true, true, b"\"'"),
            // Single quotes start lifetimes as often as char literals
            SyntaxMode::Rust => rules(RUST_KEYWORDS, false, true, b"\""),
            SyntaxMode::Cpp => rules(CPP_KEYWORDS, false, true, b"\"'"),
        }
    }

    fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word) || self.extra_keywords.contains(&word)
    }
}

/// Bytes that continue an identifier. Non-ASCII bytes count so that
/// identifiers never end inside a multi-byte character.
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || byte >= 0x80
}

/// Classify `source` for the given editor mode
pub fn highlight(source: &str, mode: SyntaxMode) -> Vec<HighlightSpan> {
    let rules = Rules::for_mode(mode);
    let bytes = source.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    let mut push = |start: usize, end: usize, kind: HighlightKind| {
        spans.push(HighlightSpan { start, end, kind });
    };

    while i < bytes.len() {
        let byte = bytes[i];
        let next = bytes.get(i + 1).copied();

        let line_comment = (rules.hash_comments && byte == b'#')
            || (rules.slash_comments && byte == b'/' && next == Some(b'/'));
        if line_comment {
            let end = find_from(bytes, i, b"\n").unwrap_or(bytes.len());
            push(i, end, HighlightKind::Comment);
            i = end;
            continue;
        }

        if rules.slash_comments && byte == b'/' && next == Some(b'*') {
            let end = find_from(bytes, i + 2, b"*/").map_or(bytes.len(), |pos| pos + 2);
            push(i, end, HighlightKind::Comment);
            i = end;
            continue;
        }

        if rules.quotes.contains(&byte) {
            let end = scan_string(bytes, i);
            push(i, end, HighlightKind::String);
            i = end;
            continue;
        }

        if byte.is_ascii_digit() {
            let mut end = i + 1;
            while end < bytes.len()
                && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'.' || bytes[end] == b'_')
            {
                end += 1;
            }
            push(i, end, HighlightKind::Number);
            i = end;
            continue;
        }

        if is_word_byte(byte) {
            let mut end = i + 1;
            while end < bytes.len() && is_word_byte(bytes[end]) {
                end += 1;
            }
            if rules.is_keyword(&source[i..end]) {
                push(i, end, HighlightKind::Keyword);
            }
            i = end;
            continue;
        }

        i += 1;
    }

    spans
}

/// End of the string literal opened at `start`. Backtick strings may span
/// lines; the others stop at the end of the line when unterminated.
fn scan_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' if quote != b'`' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }

    bytes.len()
}

fn find_from(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}
