//! Unit tests for the pseudo-execution engine

use codeplay::execution::{execute, run, simulate, simulate_by_name, SUCCESS_BANNER};
use codeplay::models::Language;

#[cfg(test)]
mod simulation_tests {
    use super::*;

    fn with_banner(lines: &[&str]) -> String {
        let mut output: Vec<&str> = lines.to_vec();
        output.push(SUCCESS_BANNER);
        output.join("\n")
    }

    #[test]
    fn test_python_hello() {
        assert_eq!(
            simulate(r#"print("Hello")"#, Language::Python),
            with_banner(&["Hello"])
        );
    }

    #[test]
    fn test_javascript_two_lines() {
        assert_eq!(
            simulate(r#"console.log("Hi"); console.log("Bye")"#, Language::JavaScript),
            "Hi\nBye\n=== Code Execution Successful ==="
        );
    }

    #[test]
    fn test_typescript_shares_console_idiom() {
        assert_eq!(
            simulate("console.log('a' + 1)", Language::TypeScript),
            with_banner(&["a1"])
        );
    }

    #[test]
    fn test_go_strips_quotes() {
        assert_eq!(simulate(r#"fmt.Println("X")"#, Language::Go), with_banner(&["X"]));
    }

    #[test]
    fn test_rust_and_cpp_samples() {
        for language in [Language::Rust, Language::Cpp] {
            assert_eq!(
                simulate(language.descriptor().sample_source, language),
                with_banner(&["Hello, World!"])
            );
        }
    }

    #[test]
    fn test_php_echo_is_echoed_verbatim() {
        assert_eq!(
            simulate(Language::Php.descriptor().sample_source, Language::Php),
            with_banner(&["greet(World)"])
        );
        assert_eq!(simulate("echo 'hi';", Language::Php), with_banner(&["hi"]));
    }

    #[test]
    fn test_cpp_needs_trailing_shift() {
        assert_eq!(simulate(r#"cout << "Hi";"#, Language::Cpp), SUCCESS_BANNER);
    }

    #[test]
    fn test_zero_matches_is_banner_only() {
        for language in Language::ALL {
            assert_eq!(simulate("no output here", language), SUCCESS_BANNER);
        }
        assert_eq!(simulate("", Language::Python), SUCCESS_BANNER);
    }

    #[test]
    fn test_unterminated_literal_is_an_error() {
        let output = simulate(r#"print("Hello)"#, Language::Python);
        assert!(output.starts_with("Error: "));
        assert!(!output.contains(SUCCESS_BANNER));
    }

    #[test]
    fn test_first_failure_discards_earlier_lines() {
        let source = "print(\"ok\")\nprint(missing)\nprint(\"never\")";
        assert_eq!(simulate(source, Language::Python), "Error: missing is not defined");
    }

    #[test]
    fn test_python_sample_reports_cut_off_call() {
        // The lazy capture stops at the first `)`, leaving `greet("World"`
        assert_eq!(
            simulate(Language::Python.descriptor().sample_source, Language::Python),
            "Error: missing ) after argument list"
        );
        assert_eq!(
            simulate(r#"print(greet("World"))"#, Language::Python),
            "Error: missing ) after argument list"
        );
        assert_eq!(
            simulate("print(greet + 1)", Language::Python),
            "Error: greet is not defined"
        );
    }

    #[test]
    fn test_syntax_error_reported_before_unknown_name() {
        assert_eq!(
            simulate("print(x +)", Language::Python),
            "Error: unexpected end of input"
        );
    }

    #[test]
    fn test_multiplicative_arithmetic() {
        assert_eq!(
            simulate("console.log(2 * 3)", Language::JavaScript),
            with_banner(&["6"])
        );
        assert_eq!(
            simulate("console.log(10 / 4)\nconsole.log(7 % 3)", Language::TypeScript),
            with_banner(&["2.5", "1"])
        );
        assert_eq!(
            simulate("print(1 / 0)", Language::Python),
            with_banner(&["Infinity"])
        );
    }

    #[test]
    fn test_numeric_separators() {
        assert_eq!(
            simulate("console.log(1_000)", Language::JavaScript),
            with_banner(&["1000"])
        );
    }

    #[test]
    fn test_lines_follow_source_order() {
        let lines = execute("print(1)\nprint('two')\nprint(1 + 2)", Language::Python).unwrap();
        assert_eq!(lines, vec!["1", "two", "3"]);
    }

    #[test]
    fn test_print_spans_single_line_only() {
        assert_eq!(simulate("print(\"a\n\")", Language::Python), SUCCESS_BANNER);
    }

    #[test]
    fn test_run_details() {
        let ok = run(r#"fmt.Println("a") fmt.Println("b")"#, Language::Go);
        assert!(ok.succeeded);
        assert_eq!(ok.line_count, 2);

        let failed = run("print(x)", Language::Python);
        assert!(!failed.succeeded);
        assert_eq!(failed.line_count, 0);
        assert_eq!(failed.text, "Error: x is not defined");
    }

    #[test]
    fn test_simulate_by_name() {
        assert_eq!(
            simulate_by_name(r#"println!("Hi")"#, "Rust"),
            with_banner(&["Hi"])
        );
        assert_eq!(simulate_by_name(r#"print("Hi")"#, "Ruby"), SUCCESS_BANNER);
        assert_eq!(simulate_by_name(r#"print("Hi")"#, "python"), SUCCESS_BANNER);
    }
}
