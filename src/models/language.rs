//! Language Registry
//!
//! Canonical, ordered definition of the languages offered by the playground.
//! Every language carries its presentation data (icon, editor mode, file
//! extension, sample program) and the print idiom the simulator looks for.

use std::fmt;

/// A supported playground language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    TypeScript,
    Go,
    Php,
    Rust,
    Cpp,
}

/// Editor highlighting mode for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxMode {
    Python,
    JavaScript,
    TypeScript,
    Go,
    Php,
    Rust,
    Cpp,
}

/// How a captured print argument is turned into an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Parse the capture as a literal expression (strings, numbers, `+`)
    EvaluateLiteral,
    /// Drop every quote character and echo the rest verbatim
    StripQuotes,
}

/// Static description of one supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub language: Language,
    /// Display name, also the lookup key
    pub name: &'static str,
    /// Glyph shown on the picker button
    pub icon: &'static str,
    pub syntax_mode: SyntaxMode,
    /// File extension including the leading dot
    pub extension: &'static str,
    /// Boilerplate loaded into the editor on selection
    pub sample_source: &'static str,
}

impl LanguageDescriptor {
    /// File name shown in the editor header, e.g. `main.py`
    pub fn file_name(&self) -> String {
        format!("main{}", self.extension)
    }
}

static REGISTRY: [LanguageDescriptor; 7] = [
    LanguageDescriptor {
        language: Language::Python,
        name: "Python",
        icon: "🐍",
        syntax_mode: SyntaxMode::Python,
        extension: ".py",
        sample_source: "# Python Code Editor\n# Write your Python code here\n\ndef greet(name):\n    return f\"Hello, {name}!\"\n\nprint(greet(\"World\"))",
    },
    LanguageDescriptor {
        language: Language::JavaScript,
        name: "JavaScript",
        icon: "JS",
        syntax_mode: SyntaxMode::JavaScript,
        extension: ".js",
        sample_source: "// JavaScript Code Editor\n// Write your JavaScript code here\n\nfunction greet(name) {\n    return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"World\"));",
    },
    LanguageDescriptor {
        language: Language::TypeScript,
        name: "TypeScript",
        icon: "TS",
        syntax_mode: SyntaxMode::TypeScript,
        extension: ".ts",
        sample_source: "// TypeScript Code Editor\n// Write your TypeScript code here\n\nfunction greet(name: string): string {\n    return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"World\"));",
    },
    LanguageDescriptor {
        language: Language::Go,
        name: "Go",
        icon: "Go",
        syntax_mode: SyntaxMode::Go,
        extension: ".go",
        sample_source: "// Go Code Editor\n// Write your Go code here\n\npackage main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello, World!\")\n}",
    },
    LanguageDescriptor {
        language: Language::Php,
        name: "PHP",
        icon: "🐘",
        syntax_mode: SyntaxMode::Php,
        extension: ".php",
        sample_source: "<?php\n// PHP Code Editor\n// Write your PHP code here\n\nfunction greet($name) {\n    return \"Hello, \" . $name . \"!\";\n}\n\necho greet(\"World\");\n?>",
    },
    LanguageDescriptor {
        language: Language::Rust,
        name: "Rust",
        icon: "🦀",
        syntax_mode: SyntaxMode::Rust,
        extension: ".rs",
        sample_source: "// Rust Code Editor\n// Write your Rust code here\n\nfn main() {\n    println!(\"Hello, World!\");\n}",
    },
    LanguageDescriptor {
        language: Language::Cpp,
        name: "C++",
        icon: "C++",
        syntax_mode: SyntaxMode::Cpp,
        extension: ".cpp",
        sample_source: "// C++ Code Editor\n// Write your C++ code here\n\n#include <iostream>\nusing namespace std;\n\nint main() {\n    cout << \"Hello, World!\" << endl;\n    return 0;\n}",
    },
];

/// All registry entries, in picker order
pub fn registry() -> &'static [LanguageDescriptor] {
    &REGISTRY
}

/// Look up a registry entry by its exact, case-sensitive name
pub fn find(name: &str) -> Option<&'static LanguageDescriptor> {
    REGISTRY.iter().find(|descriptor| descriptor.name == name)
}

impl Language {
    /// Every language, in registry order
    pub const ALL: [Language; 7] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::Php,
        Language::Rust,
        Language::Cpp,
    ];

    fn registry_index(self) -> usize {
        match self {
            Language::Python => 0,
            Language::JavaScript => 1,
            Language::TypeScript => 2,
            Language::Go => 3,
            Language::Php => 4,
            Language::Rust => 5,
            Language::Cpp => 6,
        }
    }

    /// Static descriptor for this language
    pub fn descriptor(self) -> &'static LanguageDescriptor {
        &REGISTRY[self.registry_index()]
    }

    /// Display name (the registry lookup key)
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Get language from its exact display name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        find(name).map(|descriptor| descriptor.language)
    }

    /// Get language from a file extension, with or without the leading dot
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.');
        REGISTRY
            .iter()
            .find(|descriptor| descriptor.extension.trim_start_matches('.') == extension)
            .map(|descriptor| descriptor.language)
    }

    /// Regular expression for this language's print idiom.
    ///
    /// Capture group 1 holds the argument text. The lazy `.*?` stops at the
    /// first closing token, so nested calls are cut short on purpose.
    pub fn print_pattern(self) -> &'static str {
        match self {
            Language::Python => r"print\((.*?)\)",
            Language::JavaScript | Language::TypeScript => r"console\.log\((.*?)\)",
            Language::Go => r"fmt\.Println\((.*?)\)",
            Language::Php => r"echo\s+(.*?);",
            Language::Rust => r"println!\s*\((.*?)\)",
            Language::Cpp => r"cout\s*<<\s*(.*?)\s*<<",
        }
    }

    /// How captured arguments are rendered
    pub fn extraction(self) -> Extraction {
        match self {
            Language::Python | Language::JavaScript | Language::TypeScript => {
                Extraction::EvaluateLiteral
            }
            Language::Go | Language::Php | Language::Rust | Language::Cpp => {
                Extraction::StripQuotes
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SyntaxMode {
    /// Identifier of the editor mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxMode::Python => "python",
            SyntaxMode::JavaScript => "javascript",
            SyntaxMode::TypeScript => "typescript",
            SyntaxMode::Go => "go",
            SyntaxMode::Php => "php",
            SyntaxMode::Rust => "rust",
            SyntaxMode::Cpp => "cpp",
        }
    }
}
