//! Configuration management for CodePlay
//!
//! Configuration is optional: every field has a default, and a partial file
//! only overrides the keys it names. Nothing about the editing session
//! (buffers, selected language) is ever written back.

pub mod loader;
pub mod theme;

use crate::config::theme::{Theme, ThemeManager, DEFAULT_THEME};
use crate::error::{Error, Result};
use crate::models::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for CodePlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window and theme configuration
    pub ui: UiConfig,

    /// Editor and output pane configuration
    pub editor: EditorConfig,

    /// User-defined themes, selectable by name in `ui.theme_name`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<Theme>,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// UI theme name
    pub theme_name: String,

    /// Initial window dimensions
    pub window_width: f32,
    pub window_height: f32,

    /// Width of the language picker column
    pub sidebar_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_name: DEFAULT_THEME.to_string(),
            window_width: 1200.0,
            window_height: 760.0,
            sidebar_width: 64.0,
        }
    }
}

/// Editor-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Registry name of the language selected at startup
    pub initial_language: String,

    /// Editor font size in points
    pub font_size: f32,

    /// Output pane font size in points
    pub output_font_size: f32,

    /// Color keywords, strings, comments and numbers in the editor
    pub syntax_highlighting: bool,

    /// Wrap long lines in the output pane
    pub wrap_output: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_language: Language::default().name().to_string(),
            font_size: 14.0,
            output_font_size: 13.0,
            syntax_highlighting: true,
            wrap_output: true,
        }
    }
}

impl EditorConfig {
    /// Resolve `initial_language` against the registry
    pub fn language(&self) -> Result<Language> {
        Language::from_name(&self.initial_language).ok_or_else(|| Error::UnknownLanguage {
            name: self.initial_language.clone(),
        })
    }
}

/// Runtime configuration manager
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Current configuration
    config: Config,
    /// Theme manager
    theme_manager: ThemeManager,
    /// Configuration file path (if loaded from a file)
    config_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Load configuration from the default search paths
    pub fn new() -> Result<Self> {
        let mut loader = loader::ConfigLoader::new();
        let config = loader.load_with_options(loader::LoadOptions::default())?;
        let path = loader.current_path().map(Path::to_path_buf);
        Self::from_config(config, path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config = loader::ConfigLoader::load_file(path)?;
        Self::from_config(config, Some(path.to_path_buf()))
    }

    /// Runtime configuration built purely from defaults
    pub fn new_minimal() -> Self {
        Self {
            config: Config::default(),
            theme_manager: ThemeManager::new(),
            config_path: None,
        }
    }

    /// Wrap an already validated configuration
    pub fn from_config(config: Config, config_path: Option<PathBuf>) -> Result<Self> {
        let mut theme_manager = ThemeManager::new();
        for theme in &config.themes {
            theme_manager.add_theme(theme.clone())?;
        }
        theme_manager.set_theme(&config.ui.theme_name)?;

        Ok(Self {
            config,
            theme_manager,
            config_path,
        })
    }

    /// Get current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path the configuration was loaded from
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get current theme
    pub fn current_theme(&self) -> Result<&Theme> {
        self.theme_manager.current_theme()
    }

    /// Switch theme (for `--theme`)
    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        self.theme_manager.set_theme(theme_name)?;
        self.config.ui.theme_name = theme_name.to_string();
        Ok(())
    }

    /// Override the startup language (for `--language`)
    pub fn set_initial_language(&mut self, language: Language) {
        self.config.editor.initial_language = language.name().to_string();
    }

    /// Override the window size (for `--width`/`--height`)
    pub fn set_window_size(&mut self, width: Option<f32>, height: Option<f32>) {
        if let Some(width) = width {
            self.config.ui.window_width = width;
        }
        if let Some(height) = height {
            self.config.ui.window_height = height;
        }
    }

    /// Language selected at startup, falling back to the registry default
    pub fn initial_language(&self) -> Language {
        self.config.editor.language().unwrap_or_else(|e| {
            warn!("{}. Falling back to {}", e, Language::default());
            Language::default()
        })
    }
}
