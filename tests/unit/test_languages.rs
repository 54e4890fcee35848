//! Unit tests for the language registry

use codeplay::models::language::find;
use codeplay::models::{registry, Extraction, Language, SyntaxMode};

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = registry().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["Python", "JavaScript", "TypeScript", "Go", "PHP", "Rust", "C++"]
        );
    }

    #[test]
    fn test_registry_presentation_data() {
        let icons: Vec<&str> = registry().iter().map(|d| d.icon).collect();
        assert_eq!(icons, vec!["🐍", "JS", "TS", "Go", "🐘", "🦀", "C++"]);

        let modes: Vec<&str> = registry().iter().map(|d| d.syntax_mode.as_str()).collect();
        assert_eq!(
            modes,
            vec!["python", "javascript", "typescript", "go", "php", "rust", "cpp"]
        );
    }

    #[test]
    fn test_extensions_start_with_dot_and_are_unique() {
        let mut extensions: Vec<&str> = registry().iter().map(|d| d.extension).collect();
        assert!(extensions.iter().all(|ext| ext.starts_with('.')));
        extensions.sort_unstable();
        extensions.dedup();
        assert_eq!(extensions.len(), registry().len());
    }

    #[test]
    fn test_samples_are_not_empty() {
        for descriptor in registry() {
            assert!(
                !descriptor.sample_source.trim().is_empty(),
                "{} has no sample",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_samples_contain_their_print_idiom() {
        assert!(Language::Python.descriptor().sample_source.contains("print("));
        assert!(Language::JavaScript.descriptor().sample_source.contains("console.log("));
        assert!(Language::Go.descriptor().sample_source.contains("fmt.Println("));
        assert!(Language::Php.descriptor().sample_source.contains("echo "));
        assert!(Language::Rust.descriptor().sample_source.contains("println!("));
        assert!(Language::Cpp.descriptor().sample_source.contains("cout <<"));
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(find("C++").map(|d| d.language), Some(Language::Cpp));
        assert_eq!(Language::from_name("PHP"), Some(Language::Php));
        assert!(find("Php").is_none());
        assert!(find("c++").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_lookup_by_extension() {
        assert_eq!(Language::from_extension("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension(".cpp"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("txt"), None);
    }

    #[test]
    fn test_extraction_strategies() {
        for language in [Language::Python, Language::JavaScript, Language::TypeScript] {
            assert_eq!(language.extraction(), Extraction::EvaluateLiteral);
        }
        for language in [Language::Go, Language::Php, Language::Rust, Language::Cpp] {
            assert_eq!(language.extraction(), Extraction::StripQuotes);
        }
    }

    #[test]
    fn test_display_uses_registry_name() {
        assert_eq!(Language::Cpp.to_string(), "C++");
        assert_eq!(Language::Cpp.descriptor().syntax_mode, SyntaxMode::Cpp);
        assert_eq!(Language::Cpp.descriptor().file_name(), "main.cpp");
    }
}
