//! Integration tests for end-to-end playground flows
//!
//! Drives a `Session` the way the window does: pick a language, edit,
//! run, clear.

use codeplay::execution::{NO_OUTPUT, SUCCESS_BANNER};
use codeplay::models::session::OUTPUT_PLACEHOLDER;
use codeplay::models::{registry, Language, Session};

#[test]
fn test_every_sample_runs_to_completion() {
    let mut session = Session::default();

    for descriptor in registry() {
        session.select_language(descriptor.language);
        let record = session.run().clone();

        assert_eq!(record.language, descriptor.language);
        if record.succeeded {
            assert!(session.output().ends_with(SUCCESS_BANNER));
        } else {
            assert!(session.output().starts_with("Error: "));
        }
    }
}

#[test]
fn test_selecting_resets_edits() {
    let mut session = Session::new(Language::JavaScript);
    session.source_mut().push_str("\nconsole.log('extra');");

    for descriptor in registry() {
        session.select_language(descriptor.language);
        assert_eq!(session.source(), descriptor.sample_source);

        session.select_language(descriptor.language);
        assert_eq!(session.source(), descriptor.sample_source);
    }
}

#[test]
fn test_edit_run_clear_cycle() {
    let mut session = Session::new(Language::Python);
    assert_eq!(session.output_or_placeholder(), OUTPUT_PLACEHOLDER);

    session.set_source("print('Hello')\nprint(40 + 2)");
    let record = session.run();
    assert!(record.succeeded);
    assert_eq!(record.line_count, 2);
    assert_eq!(
        session.output(),
        format!("Hello\n42\n{}", SUCCESS_BANNER)
    );
    assert!(!session.output_is_error());

    session.clear_output();
    assert!(session.output().is_empty());
    assert_eq!(session.output_or_placeholder(), OUTPUT_PLACEHOLDER);
}

#[test]
fn test_failed_run_then_fix() {
    let mut session = Session::new(Language::TypeScript);
    session.set_source("console.log(\"unterminated)");
    session.run();
    assert!(session.output_is_error());
    assert!(!session.output().contains(SUCCESS_BANNER));

    session.set_source("console.log(\"fixed\")");
    session.run();
    assert!(!session.output_is_error());
    assert_eq!(session.output(), format!("fixed\n{}", SUCCESS_BANNER));
}

#[test]
fn test_output_is_never_empty_after_run() {
    let mut session = Session::new(Language::Go);
    session.set_source("");
    session.run();
    assert_eq!(session.output(), SUCCESS_BANNER);
    assert_ne!(session.output(), NO_OUTPUT);
}

#[test]
fn test_header_follows_selection() {
    let mut session = Session::default();
    assert_eq!(session.header_label(), "Python - main.py");

    session.select_language(Language::Cpp);
    assert_eq!(session.header_label(), "C++ - main.cpp");

    session.reset_source();
    assert_eq!(session.source(), Language::Cpp.descriptor().sample_source);
}
