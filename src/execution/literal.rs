//! Literal expression evaluation
//!
//! Print arguments captured from Python, JavaScript and TypeScript sources
//! are rendered by parsing them as a tiny literal language: string, number,
//! boolean and null literals combined with `+ - * / %`, unary signs and
//! parentheses, with JavaScript's conversion rules. Identifiers and calls
//! are parsed but never resolved: the whole argument is checked for syntax
//! first, then the first unknown name is reported. Captured text is never
//! executed.

use std::iter::Peekable;
use std::str::Chars;

/// Result of evaluating a literal expression
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
}

/// Reasons a captured argument cannot be evaluated
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("template literal interpolation is not supported")]
    TemplateInterpolation,

    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(String),

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("{0} is not defined")]
    UndefinedIdentifier(String),

    #[error("{0} is not a function")]
    NotAFunction(String),

    #[error("missing ) after argument list")]
    MissingCallParen,

    #[error("missing ) in parenthetical")]
    MissingGroupParen,

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("unexpected end of input")]
    UnexpectedEnd,
}

impl Value {
    /// Text used when the value is the whole print argument.
    ///
    /// `null` and `undefined` print as empty lines.
    pub fn display(&self) -> String {
        match self {
            Value::Null | Value::Undefined => String::new(),
            other => other.to_js_string(),
        }
    }

    /// String conversion used by concatenation
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Number(n) => format_number(*n),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Undefined => "undefined".to_string(),
        }
    }

    /// Numeric conversion used by arithmetic
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(true) => 1.0,
            Value::Bool(false) | Value::Null => 0.0,
            Value::Undefined => f64::NAN,
            Value::Str(s) => string_to_number(s),
        }
    }
}

/// Evaluate a captured argument
pub fn evaluate(text: &str) -> Result<Value, LiteralError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        deferred: None,
    };
    parser.parse()
}

/// Format a number the way JavaScript's `String(n)` does
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", n)
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Str(String),
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
    Comma,
    Other(char),
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Str(_) => "string".to_string(),
            Token::Number(n) => format_number(*n),
            Token::Ident(name) => name.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Comma => ",".to_string(),
            Token::Other(c) => c.to_string(),
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<Token>, LiteralError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '"' | '\'' | '`' => {
                chars.next();
                tokens.push(Token::Str(lex_string(&mut chars, c)?));
            }
            '+' | '-' | '*' | '/' | '%' | '(' | ')' | ',' => {
                chars.next();
                tokens.push(match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '%' => Token::Percent,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    _ => Token::Comma,
                });
            }
            c if c.is_ascii_digit() => {
                tokens.push(Token::Number(lex_number(&mut chars)?));
            }
            '.' => {
                let mut lookahead = chars.clone();
                lookahead.next();
                if lookahead.peek().is_some_and(|d| d.is_ascii_digit()) {
                    tokens.push(Token::Number(lex_number(&mut chars)?));
                } else {
                    chars.next();
                    tokens.push(Token::Other('.'));
                }
            }
            c if is_ident_start(c) => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_ident_continue(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                tokens.push(Token::Ident(name));
            }
            other => {
                chars.next();
                tokens.push(Token::Other(other));
            }
        }
    }

    Ok(tokens)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn lex_string(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, LiteralError> {
    let mut value = String::new();
    loop {
        let c = chars.next().ok_or(LiteralError::UnterminatedString)?;
        match c {
            c if c == quote => return Ok(value),
            '\n' if quote != '`' => return Err(LiteralError::UnterminatedString),
            '$' if quote == '`' && chars.peek() == Some(&'{') => {
                return Err(LiteralError::TemplateInterpolation);
            }
            '\\' => {
                if let Some(escaped) = lex_escape(chars)? {
                    value.push(escaped);
                }
            }
            other => value.push(other),
        }
    }
}

/// Returns `None` for a line continuation
fn lex_escape(chars: &mut Peekable<Chars<'_>>) -> Result<Option<char>, LiteralError> {
    let c = chars.next().ok_or(LiteralError::UnterminatedString)?;
    let escaped = match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'v' => '\u{b}',
        '0' if !chars.peek().is_some_and(|d| d.is_ascii_digit()) => '\0',
        '1'..='9' | '0' => return Err(LiteralError::InvalidEscape(c.to_string())),
        '\n' => return Ok(None),
        'x' => {
            let digits: String = take_hex(chars, 2);
            if digits.len() != 2 {
                return Err(LiteralError::InvalidEscape(format!("x{}", digits)));
            }
            code_point(&digits, 'x')?
        }
        'u' => {
            if chars.peek() == Some(&'{') {
                chars.next();
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(d) if d.is_ascii_hexdigit() => digits.push(d),
                        _ => return Err(LiteralError::InvalidEscape(format!("u{{{}", digits))),
                    }
                }
                if digits.is_empty() || digits.len() > 6 {
                    return Err(LiteralError::InvalidEscape(format!("u{{{}}}", digits)));
                }
                code_point(&digits, 'u')?
            } else {
                let digits = take_hex(chars, 4);
                if digits.len() != 4 {
                    return Err(LiteralError::InvalidEscape(format!("u{}", digits)));
                }
                code_point(&digits, 'u')?
            }
        }
        other => other,
    };
    Ok(Some(escaped))
}

fn take_hex(chars: &mut Peekable<Chars<'_>>, max: usize) -> String {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(&d) if d.is_ascii_hexdigit() => {
                digits.push(d);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}

fn code_point(digits: &str, prefix: char) -> Result<char, LiteralError> {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| LiteralError::InvalidEscape(format!("{}{}", prefix, digits)))
}

fn lex_number(chars: &mut Peekable<Chars<'_>>) -> Result<f64, LiteralError> {
    let mut text = String::new();

    if chars.peek() == Some(&'0') {
        let mut lookahead = chars.clone();
        lookahead.next();
        let radix = match lookahead.peek() {
            Some('x' | 'X') => Some(16),
            Some('o' | 'O') => Some(8),
            Some('b' | 'B') => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            chars.next();
            if let Some(marker) = chars.next() {
                text.push('0');
                text.push(marker);
            }
            let mut digits = String::new();
            take_digits(chars, &mut digits, |c| c.is_ascii_alphanumeric())
                .map_err(|rest| LiteralError::InvalidNumber(format!("{}{}", text, rest)))?;
            text.push_str(&digits);
            return u64::from_str_radix(&digits, radix)
                .map(|n| n as f64)
                .map_err(|_| LiteralError::InvalidNumber(text));
        }
    }

    take_digits(chars, &mut text, |c| c.is_ascii_digit() || c == '.')
        .map_err(LiteralError::InvalidNumber)?;

    if let Some(&e) = chars.peek() {
        if e == 'e' || e == 'E' {
            text.push(e);
            chars.next();
            if let Some(&sign) = chars.peek() {
                if sign == '+' || sign == '-' {
                    text.push(sign);
                    chars.next();
                }
            }
            take_digits(chars, &mut text, |c| c.is_ascii_digit())
                .map_err(LiteralError::InvalidNumber)?;
        }
    }

    if let Some(&c) = chars.peek() {
        if is_ident_start(c) || c.is_ascii_digit() {
            text.push(c);
            return Err(LiteralError::InvalidNumber(text));
        }
    }

    text.parse::<f64>()
        .map_err(|_| LiteralError::InvalidNumber(text))
}

/// Append digits accepted by `accept` to `text`, dropping `_` separators.
///
/// A separator must sit between two digits; otherwise the text read so far
/// (separator included) is returned as the error.
fn take_digits(
    chars: &mut Peekable<Chars<'_>>,
    text: &mut String,
    accept: fn(char) -> bool,
) -> Result<(), String> {
    let digit = |d: char| d.is_ascii_alphanumeric() && accept(d);
    while let Some(&c) = chars.peek() {
        if c == '_' {
            let mut lookahead = chars.clone();
            lookahead.next();
            let between_digits =
                text.ends_with(digit) && lookahead.peek().is_some_and(|&d| digit(d));
            if !between_digits {
                text.push('_');
                return Err(text.clone());
            }
            chars.next();
        } else if accept(c) {
            text.push(c);
            chars.next();
        } else {
            break;
        }
    }
    Ok(())
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// First evaluation error, raised only once the whole input has parsed
    deferred: Option<LiteralError>,
}

impl Parser {
    fn parse(&mut self) -> Result<Value, LiteralError> {
        if self.tokens.is_empty() {
            return Ok(Value::Undefined);
        }
        let value = self.parse_sum()?;
        if let Some(token) = self.tokens.get(self.pos) {
            return Err(LiteralError::UnexpectedToken(token.describe()));
        }
        match self.deferred.take() {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn defer(&mut self, err: LiteralError) {
        self.deferred.get_or_insert(err);
    }

    fn parse_sum(&mut self) -> Result<Value, LiteralError> {
        let mut value = self.parse_product()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let rhs = self.parse_product()?;
                    value = add(value, rhs);
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let rhs = self.parse_product()?;
                    value = Value::Number(value.to_number() - rhs.to_number());
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_product(&mut self) -> Result<Value, LiteralError> {
        let mut value = self.parse_unary()?;
        loop {
            let op: fn(f64, f64) -> f64 = match self.peek() {
                Some(Token::Star) => |a, b| a * b,
                Some(Token::Slash) => |a, b| a / b,
                // f64 `%` keeps the dividend's sign and gives NaN for a zero divisor
                Some(Token::Percent) => |a, b| a % b,
                _ => return Ok(value),
            };
            self.pos += 1;
            let rhs = self.parse_unary()?;
            value = Value::Number(op(value.to_number(), rhs.to_number()));
        }
    }

    fn parse_unary(&mut self) -> Result<Value, LiteralError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                Ok(Value::Number(self.parse_unary()?.to_number()))
            }
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Value::Number(-self.parse_unary()?.to_number()))
            }
            _ => self.parse_call(),
        }
    }

    /// A primary followed by any number of call argument lists
    fn parse_call(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let mut value = self.parse_primary()?;
        let callee = match &self.tokens[start..self.pos] {
            [Token::Ident(name)] => name.clone(),
            _ => value.to_js_string(),
        };

        while self.peek() == Some(&Token::LParen) {
            self.pos += 1;
            self.parse_arguments()?;
            self.defer(LiteralError::NotAFunction(callee.clone()));
            value = Value::Undefined;
        }

        Ok(value)
    }

    /// Arguments after an opening parenthesis, up to and including `)`
    fn parse_arguments(&mut self) -> Result<(), LiteralError> {
        if self.peek() == Some(&Token::RParen) {
            self.pos += 1;
            return Ok(());
        }
        loop {
            if self.peek().is_none() {
                return Err(LiteralError::MissingCallParen);
            }
            self.parse_sum()?;
            match self.peek() {
                Some(Token::Comma) => {
                    self.pos += 1;
                    if self.peek() == Some(&Token::RParen) {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                Some(Token::RParen) => {
                    self.pos += 1;
                    return Ok(());
                }
                None => return Err(LiteralError::MissingCallParen),
                Some(token) => return Err(LiteralError::UnexpectedToken(token.describe())),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Value, LiteralError> {
        let token = self.peek().cloned().ok_or(LiteralError::UnexpectedEnd)?;
        self.pos += 1;

        match token {
            Token::Str(s) => Ok(Value::Str(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Ident(name) => Ok(match name.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                "null" => Value::Null,
                "undefined" => Value::Undefined,
                "NaN" => Value::Number(f64::NAN),
                "Infinity" => Value::Number(f64::INFINITY),
                _ => {
                    self.defer(LiteralError::UndefinedIdentifier(name));
                    Value::Undefined
                }
            }),
            Token::LParen => {
                let value = self.parse_sum()?;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    None => Err(LiteralError::MissingGroupParen),
                    Some(token) => Err(LiteralError::UnexpectedToken(token.describe())),
                }
            }
            other => Err(LiteralError::UnexpectedToken(other.describe())),
        }
    }
}

fn add(lhs: Value, rhs: Value) -> Value {
    match (&lhs, &rhs) {
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            Value::Str(lhs.to_js_string() + &rhs.to_js_string())
        }
        _ => Value::Number(lhs.to_number() + rhs.to_number()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_display(text: &str) -> String {
        evaluate(text).unwrap().display()
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(eval_display(r#""Hello""#), "Hello");
        assert_eq!(eval_display("'single'"), "single");
        assert_eq!(eval_display("`plain template`"), "plain template");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(eval_display(r#""a\tb""#), "a\tb");
        assert_eq!(eval_display(r#""say \"hi\"""#), "say \"hi\"");
        assert_eq!(eval_display(r#""\x41B\u{43}""#), "ABC");
        assert_eq!(eval_display(r#""\q""#), "q");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(eval_display("42"), "42");
        assert_eq!(eval_display("1.5"), "1.5");
        assert_eq!(eval_display(".5"), "0.5");
        assert_eq!(eval_display("0x1F"), "31");
        assert_eq!(eval_display("0b101"), "5");
        assert_eq!(eval_display("2e3"), "2000");
        assert_eq!(eval_display("-7"), "-7");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_concatenation_rules() {
        assert_eq!(eval_display(r#""Hello, " + "World""#), "Hello, World");
        assert_eq!(eval_display(r#""a" + 1"#), "a1");
        assert_eq!(eval_display(r#"1 + 2 + "3""#), "33");
        assert_eq!(eval_display(r#""3" + 1 + 2"#), "312");
        assert_eq!(eval_display("true + 1"), "2");
        assert_eq!(eval_display(r#""x" + null"#), "xnull");
        assert_eq!(eval_display("undefined + 1"), "NaN");
        assert_eq!(eval_display(r#""5" - 2"#), "3");
    }

    #[test]
    fn test_empty_and_null_print_blank() {
        assert_eq!(eval_display(""), "");
        assert_eq!(eval_display("   "), "");
        assert_eq!(eval_display("null"), "");
        assert_eq!(eval_display("undefined"), "");
        assert_eq!(eval_display("false"), "false");
    }

    #[test]
    fn test_errors() {
        assert_eq!(evaluate(r#""Hello"#), Err(LiteralError::UnterminatedString));
        assert_eq!(
            evaluate("greet"),
            Err(LiteralError::UndefinedIdentifier("greet".to_string()))
        );
        assert_eq!(evaluate(r#""a" +"#), Err(LiteralError::UnexpectedEnd));
        assert_eq!(
            evaluate(r#""a", "b""#),
            Err(LiteralError::UnexpectedToken(",".to_string()))
        );
        assert_eq!(
            evaluate("`Hello, ${name}`"),
            Err(LiteralError::TemplateInterpolation)
        );
        assert_eq!(
            evaluate("12abc"),
            Err(LiteralError::InvalidNumber("12a".to_string()))
        );
        assert!(matches!(evaluate(r#""\u12""#), Err(LiteralError::InvalidEscape(_))));
    }

    #[test]
    fn test_multiplicative_operators() {
        assert_eq!(eval_display("2 * 3"), "6");
        assert_eq!(eval_display("10 / 4"), "2.5");
        assert_eq!(eval_display("7 % 3"), "1");
        assert_eq!(eval_display("-7 % 3"), "-1");
        assert_eq!(eval_display("1 + 2 * 3"), "7");
        assert_eq!(eval_display("2 * 3 - 8 / 4"), "4");
        assert_eq!(eval_display("(1 + 2) * 3"), "9");
        assert_eq!(eval_display(r#""6" / "2""#), "3");
        assert_eq!(eval_display(r#""a" * 2"#), "NaN");
        assert_eq!(eval_display("1 / 0"), "Infinity");
        assert_eq!(eval_display("-1 / 0"), "-Infinity");
        assert_eq!(eval_display("5 % 0"), "NaN");
    }

    #[test]
    fn test_numeric_separators() {
        assert_eq!(eval_display("1_000"), "1000");
        assert_eq!(eval_display("1_000.5_5"), "1000.55");
        assert_eq!(eval_display("0xFF_FF"), "65535");
        assert_eq!(evaluate("1_"), Err(LiteralError::InvalidNumber("1_".to_string())));
        assert_eq!(evaluate("1__0"), Err(LiteralError::InvalidNumber("1_".to_string())));
        assert_eq!(evaluate("0x_1"), Err(LiteralError::InvalidNumber("0x_".to_string())));
    }

    #[test]
    fn test_syntax_errors_win_over_unknown_names() {
        assert_eq!(
            evaluate(r#"greet("World""#),
            Err(LiteralError::MissingCallParen)
        );
        assert_eq!(
            evaluate("x +"),
            Err(LiteralError::UnexpectedEnd)
        );
        assert_eq!(evaluate("(1 + x"), Err(LiteralError::MissingGroupParen));
        assert_eq!(
            evaluate(r#"greet("World")"#),
            Err(LiteralError::UndefinedIdentifier("greet".to_string()))
        );
        assert_eq!(
            evaluate("a + b"),
            Err(LiteralError::UndefinedIdentifier("a".to_string()))
        );
        assert_eq!(
            evaluate("true(1, 2,)"),
            Err(LiteralError::NotAFunction("true".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LiteralError::UndefinedIdentifier("name".to_string()).to_string(),
            "name is not defined"
        );
        assert_eq!(
            LiteralError::UnterminatedString.to_string(),
            "unterminated string literal"
        );
    }
}
