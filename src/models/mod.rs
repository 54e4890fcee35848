//! Core data models for CodePlay
//!
//! The language registry and the per-window playground session.

pub mod language;
pub mod session;

// Re-exports for convenience
pub use language::{registry, Extraction, Language, LanguageDescriptor, SyntaxMode};
pub use session::{RunRecord, Session};
