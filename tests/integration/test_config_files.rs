//! Integration tests for configuration files on disk

use codeplay::config::loader::{ConfigLoader, LoadOptions};
use codeplay::config::theme::{Color, Theme};
use codeplay::config::{Config, RuntimeConfig};
use codeplay::models::Language;
use codeplay::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.editor.initial_language = "Rust".to_string();
    config.editor.font_size = 16.0;
    config.ui.theme_name = "light".to_string();

    ConfigLoader::save_to_path(&config, &path).unwrap();
    let loaded = ConfigLoader::load_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip_with_custom_theme() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut theme = Theme::dark();
    theme.name = "ocean".to_string();
    theme.accent = Color::from_hex("#0EA5E9").unwrap();

    let mut config = Config::default();
    config.themes.push(theme);
    config.ui.theme_name = "ocean".to_string();

    ConfigLoader::save_to_path(&config, &path).unwrap();
    let runtime = RuntimeConfig::load_from_file(&path).unwrap();
    assert_eq!(runtime.current_theme().unwrap().accent.to_hex(), "#0EA5E9");
    assert_eq!(runtime.config_path(), Some(path.as_path()));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = ConfigLoader::load_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::ConfigLoadFailed { .. })));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[editor\nfont_size = ").unwrap();

    let result = ConfigLoader::load_file(&path);
    assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nsidebar_width = 500.0\n").unwrap();

    let result = ConfigLoader::load_file(&path);
    assert!(matches!(
        result,
        Err(Error::ConfigValidationFailed { ref field, .. }) if field == "ui.sidebar_width"
    ));
}

#[test]
fn test_search_paths_prefer_first_match() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first").join("config");
    let second = dir.path().join("second").join("config");
    fs::create_dir_all(first.parent().unwrap()).unwrap();
    fs::create_dir_all(second.parent().unwrap()).unwrap();
    fs::write(first.with_extension("toml"), "[editor]\ninitial_language = \"Go\"\n").unwrap();
    fs::write(second.with_extension("toml"), "[editor]\ninitial_language = \"PHP\"\n").unwrap();

    let mut loader = ConfigLoader::with_search_paths(vec![first.clone(), second]);
    let config = loader.load_with_options(LoadOptions::default()).unwrap();

    assert_eq!(config.editor.language().unwrap(), Language::Go);
    assert_eq!(loader.current_path(), Some(first.with_extension("toml").as_path()));
}
