//! UI components and rendering
//!
//! Stateless-ish egui components for the playground window. The window
//! layout itself lives in the binary's `app` module.

pub mod colors;
pub mod editor;
pub mod highlight;
pub mod output;
pub mod picker;

// Re-exports for convenience
pub use colors::{apply_theme, ToEguiColor, UiColors};
pub use editor::CodeEditor;
pub use highlight::{highlight, HighlightKind, HighlightSpan};
pub use output::{OutputPane, OutputTone};
pub use picker::LanguagePicker;
