//! Playground Session
//!
//! Editor session state owned by the UI shell: the selected language, the
//! text in the editor and the text in the output pane. All transitions go
//! through the methods here so the buffers never drift from the selection.

use crate::execution::{self, NO_OUTPUT};
use crate::models::language::{Language, LanguageDescriptor};
use chrono::{DateTime, Utc};

/// Placeholder shown in the output pane before the first run
pub const OUTPUT_PLACEHOLDER: &str = "Run the code to see output";

/// Summary of the most recent run
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub language: Language,
    pub line_count: usize,
    pub succeeded: bool,
    pub finished_at: DateTime<Utc>,
}

/// One playground session
#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    source: String,
    output: String,
    last_run: Option<RunRecord>,
}

impl Session {
    /// Start a session with the sample program of `language` loaded
    pub fn new(language: Language) -> Self {
        Self {
            language,
            source: language.descriptor().sample_source.to_string(),
            output: String::new(),
            last_run: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn descriptor(&self) -> &'static LanguageDescriptor {
        self.language.descriptor()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Editable buffer, bound to the editor widget
    pub fn source_mut(&mut self) -> &mut String {
        &mut self.source
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn last_run(&self) -> Option<&RunRecord> {
        self.last_run.as_ref()
    }

    /// Switch language; the editor is reset to that language's sample.
    ///
    /// Selecting the current language again also resets the buffer.
    pub fn select_language(&mut self, language: Language) {
        debug!("Selecting language {}", language);
        self.language = language;
        self.reset_source();
    }

    /// Replace the editor contents
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Restore the sample program of the current language
    pub fn reset_source(&mut self) {
        self.source = self.descriptor().sample_source.to_string();
    }

    /// Simulate the current buffer and show the result
    pub fn run(&mut self) -> &RunRecord {
        let simulation = execution::run(&self.source, self.language);
        self.output = if simulation.text.is_empty() {
            NO_OUTPUT.to_string()
        } else {
            simulation.text
        };

        debug!(
            "Simulated {} run: {} line(s), succeeded={}",
            self.language, simulation.line_count, simulation.succeeded
        );

        self.last_run.insert(RunRecord {
            language: self.language,
            line_count: simulation.line_count,
            succeeded: simulation.succeeded,
            finished_at: Utc::now(),
        })
    }

    /// Empty the output pane
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Header label, e.g. `Python - main.py`
    pub fn header_label(&self) -> String {
        let descriptor = self.descriptor();
        format!("{} - {}", descriptor.name, descriptor.file_name())
    }

    /// Output text, or the placeholder when nothing has been run
    pub fn output_or_placeholder(&self) -> &str {
        if self.output.is_empty() {
            OUTPUT_PLACEHOLDER
        } else {
            &self.output
        }
    }

    /// Whether the output pane currently shows a failed run
    pub fn output_is_error(&self) -> bool {
        self.last_run.as_ref().is_some_and(|run| !run.succeeded) && !self.output.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
