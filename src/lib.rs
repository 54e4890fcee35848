//! CodePlay - a multi-language code playground
//!
//! This library provides the core of CodePlay, a small GUI playground with a
//! language picker, a code editor and an output pane. Output is *simulated*:
//! no code is compiled, interpreted or executed.
//!
//! ## Module Organization
//!
//! - [`models`] - Language registry and the playground session state
//! - [`execution`] - Regex-driven output simulation and literal evaluation
//! - [`config`] - Configuration loading, validation and themes
//! - [`ui`] - egui rendering components (picker, editor, output pane)
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use codeplay::execution::{simulate, SUCCESS_BANNER};
//! use codeplay::models::Language;
//!
//! let output = simulate(r#"fmt.Println("X")"#, Language::Go);
//! assert_eq!(output, format!("X\n{}", SUCCESS_BANNER));
//! ```
//!
//! ## Architecture
//!
//! Everything runs on the egui UI thread. A run is a pure function of the
//! editor text and the selected language and completes inside the click
//! handler that requested it.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod execution;
pub mod models;
pub mod ui;

// Re-exports for core functionality
pub use config::{Config, RuntimeConfig};
pub use error::{Error, Result};
pub use execution::{simulate, simulate_by_name};
pub use models::{Language, LanguageDescriptor, Session};

/// The current version of CodePlay from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize CodePlay with configuration from the default locations
///
/// Falls back to built-in defaults when no usable configuration file is
/// found; a file that exists but fails validation is reported and ignored.
pub fn init() -> RuntimeConfig {
    info!("Initializing {} v{}", NAME, VERSION);

    match RuntimeConfig::new() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            RuntimeConfig::new_minimal()
        }
    }
}

/// Initialize CodePlay from an explicit configuration file
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be parsed, or fails
/// validation.
pub fn init_with_config(config_path: &std::path::Path) -> Result<RuntimeConfig> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let runtime_config = RuntimeConfig::load_from_file(config_path)?;
    info!("Custom configuration loaded from: {}", config_path.display());
    Ok(runtime_config)
}
