//! Property-based tests for the simulator and the editor highlighter
//!
//! These tests use proptest to generate random sources and verify that
//! simulation and highlighting never panic and keep their output shape.

use codeplay::execution::{simulate, SUCCESS_BANNER};
use codeplay::models::{registry, Language, Session};
use codeplay::ui::highlight::highlight;
use proptest::prelude::*;

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_simulate_doesnt_panic(source in "\\PC*", language in any_language()) {
        let _ = simulate(&source, language);
    }

    #[test]
    fn test_output_ends_with_banner_or_is_error(
        source in "(print|console\\.log|fmt\\.Println|println!)\\([ -~]{0,20}\\)",
        language in any_language(),
    ) {
        let output = simulate(&source, language);
        prop_assert!(
            output.ends_with(SUCCESS_BANNER) || output.starts_with("Error: "),
            "unexpected output: {}",
            output
        );
    }

    #[test]
    fn test_banner_only_without_print_idioms(source in "[a-z ;{}=]{0,200}", language in any_language()) {
        prop_assume!(!source.contains("print")
            && !source.contains("echo")
            && !source.contains("cout"));
        prop_assert_eq!(simulate(&source, language), SUCCESS_BANNER);
    }

    #[test]
    fn test_quoted_words_are_printed(word in "[A-Za-z0-9 ,!]{0,30}") {
        let expected = format!("{}\n{}", word, SUCCESS_BANNER);
        prop_assert_eq!(simulate(&format!("print(\"{}\")", word), Language::Python), expected.clone());
        prop_assert_eq!(simulate(&format!("fmt.Println(\"{}\")", word), Language::Go), expected);
    }

    #[test]
    fn test_selection_always_restores_sample(
        edits in "\\PC{0,50}",
        picks in prop::collection::vec(0usize..7, 1..10),
    ) {
        let mut session = Session::default();
        for index in picks {
            session.set_source(edits.clone());
            let descriptor = &registry()[index];
            session.select_language(descriptor.language);
            prop_assert_eq!(session.source(), descriptor.sample_source);
        }
    }

    #[test]
    fn test_highlight_spans_are_ordered_and_in_bounds(source in "\\PC{0,300}", language in any_language()) {
        let spans = highlight(&source, language.descriptor().syntax_mode);
        let mut previous_end = 0;
        for span in spans {
            prop_assert!(span.start >= previous_end);
            prop_assert!(span.start < span.end);
            prop_assert!(span.end <= source.len());
            prop_assert!(source.is_char_boundary(span.start));
            prop_assert!(source.is_char_boundary(span.end));
            previous_end = span.end;
        }
    }
}
