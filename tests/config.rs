//! Configuration system tests
//!
//! Tests for config paths and dot field config loading/saving.

use std::path::PathBuf;

use dotfield::config::{FieldConfig, ThemePreference, MIN_SPACING};
use dotfield::config_paths;
use dotfield::theme::ThemeMode;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("dotfield"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_themes_and_logs_are_subdirs_of_config() {
    let config = config_paths::config_dir().unwrap();
    assert!(config_paths::themes_dir().unwrap().starts_with(&config));
    assert!(config_paths::logs_dir().unwrap().starts_with(&config));
}

#[test]
fn test_xdg_config_home_takes_precedence() {
    let dir = config_paths::app_dir_from(
        Some(PathBuf::from("/tmp/xdg")),
        Some(PathBuf::from("/home/someone")),
    );
    assert_eq!(dir, Some(PathBuf::from("/tmp/xdg/dotfield")));
}

#[test]
fn test_home_fallback_uses_dot_config() {
    let dir = config_paths::app_dir_from(None, Some(PathBuf::from("/home/someone")));
    assert_eq!(dir, Some(PathBuf::from("/home/someone/.config/dotfield")));

    let empty_xdg = config_paths::app_dir_from(
        Some(PathBuf::new()),
        Some(PathBuf::from("/home/someone")),
    );
    assert_eq!(empty_xdg, dir);
}

#[test]
fn test_no_home_means_no_config_dir() {
    assert_eq!(config_paths::app_dir_from(None, None), None);
}

// ========================================================================
// Field Config Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = FieldConfig::default();
    assert_eq!(config.theme, ThemePreference::System);
    assert_eq!(config.light_theme, "default-light");
    assert_eq!(config.dark_theme, "default-dark");
    assert_eq!(config.spacing, 10.0);
    assert_eq!(config.base_radius, 1.0);
    assert_eq!(config.max_boost, 2.0);
    assert_eq!(config.effect_radius, 100.0);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let config = FieldConfig::from_yaml("theme: dark\nspacing: 16\n").unwrap();
    assert_eq!(config.theme, ThemePreference::Dark);
    assert_eq!(config.spacing, 16.0);
    assert_eq!(config.base_radius, 1.0);
    assert_eq!(config.dark_theme, "default-dark");
}

#[test]
fn test_empty_yaml_is_default() {
    let config = FieldConfig::from_yaml("{}").unwrap();
    assert_eq!(config, FieldConfig::default());
}

#[test]
fn test_invalid_theme_preference_is_error() {
    assert!(FieldConfig::from_yaml("theme: sepia\n").is_err());
}

#[test]
fn test_invalid_values_are_sanitized() {
    let config =
        FieldConfig::from_yaml("spacing: 0\nbase_radius: -1\nmax_boost: -2\neffect_radius: .nan\n")
            .unwrap();
    let defaults = FieldConfig::default();
    assert_eq!(config.spacing, defaults.spacing);
    assert_eq!(config.base_radius, defaults.base_radius);
    assert_eq!(config.max_boost, defaults.max_boost);
    assert_eq!(config.effect_radius, defaults.effect_radius);
}

#[test]
fn test_tiny_spacing_is_replaced() {
    let config = FieldConfig::from_yaml("spacing: 1.0e-12\n").unwrap();
    assert_eq!(config.spacing, FieldConfig::default().spacing);

    let config = FieldConfig::from_yaml("spacing: 0.5\n").unwrap();
    assert_eq!(config.spacing, FieldConfig::default().spacing);

    let config = FieldConfig::from_yaml(&format!("spacing: {}\n", MIN_SPACING))
        .unwrap();
    assert_eq!(config.spacing, MIN_SPACING);
}

#[test]
fn test_radii_larger_than_spacing_are_replaced() {
    let config = FieldConfig::from_yaml("base_radius: 1.0e9\nmax_boost: 1.0e9\n")
        .unwrap();
    assert_eq!(config.base_radius, 1.0);
    assert_eq!(config.max_boost, 2.0);

    let config = FieldConfig::from_yaml("spacing: 12\nbase_radius: 12\nmax_boost: 12.5\n")
        .unwrap();
    assert_eq!(config.base_radius, 12.0);
    assert_eq!(config.max_boost, 2.0);
}

#[test]
fn test_radius_defaults_fit_small_spacing() {
    let config = FieldConfig::from_yaml("spacing: 1\nmax_boost: 5\n").unwrap();
    assert_eq!(config.spacing, 1.0);
    assert_eq!(config.base_radius, 1.0);
    assert_eq!(config.max_boost, 1.0);
}

#[test]
fn test_zero_boost_is_allowed() {
    let config = FieldConfig::from_yaml("max_boost: 0\n").unwrap();
    assert_eq!(config.max_boost, 0.0);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = FieldConfig {
        theme: ThemePreference::Light,
        light_theme: "high-contrast-light".to_string(),
        spacing: 12.5,
        ..FieldConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = FieldConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_from_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FieldConfig::load_from(&dir.path().join("config.yaml")).unwrap_err();
    assert!(err.contains("config.yaml"));
}

// ========================================================================
// Theme Preference Tests
// ========================================================================

#[test]
fn test_preference_resolve() {
    assert_eq!(
        ThemePreference::System.resolve(ThemeMode::Dark),
        ThemeMode::Dark
    );
    assert_eq!(
        ThemePreference::Light.resolve(ThemeMode::Dark),
        ThemeMode::Light
    );
    assert_eq!(
        ThemePreference::Dark.resolve(ThemeMode::Light),
        ThemeMode::Dark
    );
    assert!(ThemePreference::System.follows_system());
    assert!(!ThemePreference::Dark.follows_system());
}
