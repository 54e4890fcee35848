//! Configuration File Loading
//!
//! Finds, parses, validates and saves configuration files. TOML is the
//! primary format; JSON is accepted for files ending in `.json`.

use super::Config;
use crate::error::{Error, Result};
use crate::models::Language;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the various config roots
const APP_DIR: &str = "codeplay";

/// Configuration file loader
pub struct ConfigLoader {
    /// Base paths (without extension) searched for configuration files
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats, in the order they are tried
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }

    /// Format implied by a file extension; anything but `.json` is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl ConfigLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self::with_search_paths(Self::get_search_paths())
    }

    /// Create a loader over explicit base paths
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration with custom options
    pub fn load_with_options(&mut self, options: LoadOptions) -> Result<Config> {
        if let Some((path, config)) = self.find_and_load_config() {
            info!("Configuration loaded from {}", path.display());
            self.current_path = Some(path);
            if options.validate {
                Self::validate_config(&config)?;
            }
            return Ok(config);
        }

        if options.create_default {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load and validate one specific file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let config = Self::load_config_file(path, ConfigFormat::from_path(path))?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to a specific path, format chosen by extension
    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let format = ConfigFormat::from_path(path);
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        }
        .map_err(|reason| Error::ConfigSerializationFailed {
            format: format.label().to_string(),
            reason,
        })?;

        fs::write(path, content).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Find and load configuration from search paths.
    ///
    /// Unreadable or malformed files are logged and skipped.
    fn find_and_load_config(&self) -> Option<(PathBuf, Config)> {
        for base in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = base.with_extension(format.extension());
                if !config_path.exists() {
                    continue;
                }

                match Self::load_config_file(&config_path, *format) {
                    Ok(config) => return Some((config_path, config)),
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", config_path.display(), e);
                    }
                }
            }
        }

        None
    }

    /// Load a specific configuration file
    fn load_config_file(path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| Error::ConfigParseFailed {
            format: format.label().to_string(),
            reason,
        })
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join(APP_DIR).join("config"));
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_DIR).join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{}", APP_DIR)).join("config"));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(format!(".{}", APP_DIR)).join("config"));
        }

        paths.dedup();
        paths
    }

    /// Default location used when writing a fresh config file
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Validate configuration
    pub fn validate_config(config: &Config) -> Result<()> {
        let invalid = |field: &str, reason: String| -> Result<()> {
            Err(Error::ConfigValidationFailed {
                field: field.to_string(),
                reason,
            })
        };

        // UI validation
        if config.ui.theme_name.trim().is_empty() {
            return invalid("ui.theme_name", "Theme name cannot be empty".to_string());
        }

        if !(config.ui.window_width >= 400.0 && config.ui.window_height >= 300.0) {
            return invalid(
                "ui.window_width",
                format!(
                    "Window must be at least 400x300 (got {}x{})",
                    config.ui.window_width, config.ui.window_height
                ),
            );
        }

        if !(40.0..=240.0).contains(&config.ui.sidebar_width) {
            return invalid(
                "ui.sidebar_width",
                "Sidebar width must be between 40 and 240".to_string(),
            );
        }

        // Editor validation
        for (field, size) in [
            ("editor.font_size", config.editor.font_size),
            ("editor.output_font_size", config.editor.output_font_size),
        ] {
            if !(6.0..=72.0).contains(&size) {
                return invalid(field, format!("Font size {} must be between 6 and 72", size));
            }
        }

        if Language::from_name(&config.editor.initial_language).is_none() {
            return invalid(
                "editor.initial_language",
                format!(
                    "'{}' is not a supported language",
                    config.editor.initial_language
                ),
            );
        }

        // Theme validation
        for (index, theme) in config.themes.iter().enumerate() {
            if theme.name.trim().is_empty() {
                return invalid("themes.name", "Theme name cannot be empty".to_string());
            }
            if config.themes[..index].iter().any(|other| other.name == theme.name) {
                return invalid("themes.name", format!("Duplicate theme '{}'", theme.name));
            }
        }

        Ok(())
    }

    /// Get the current configuration file path
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
