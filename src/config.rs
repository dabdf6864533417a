//! Dot field configuration persistence
//!
//! Stores user preferences in `~/.config/dotfield/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Which color scheme to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the operating system preference, including live changes
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve against the current system mode
    pub fn resolve(self, system: ThemeMode) -> ThemeMode {
        match self {
            ThemePreference::System => system,
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        }
    }

    pub fn follows_system(self) -> bool {
        self == ThemePreference::System
    }
}

/// Smallest dot spacing accepted from config, in logical pixels
pub const MIN_SPACING: f64 = 1.0;

/// Dot field configuration that persists across sessions
///
/// Lengths are logical pixels, except `effect_radius` which is measured in
/// device pixels and is not scaled by display density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub theme: ThemePreference,
    /// Theme id used while the light scheme is active
    #[serde(default = "default_light_theme")]
    pub light_theme: String,
    /// Theme id used while the dark scheme is active
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,
    /// Distance between neighbouring dot centers
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Dot radius far away from the pointer
    #[serde(default = "default_base_radius")]
    pub base_radius: f64,
    /// Extra radius added directly under the pointer
    #[serde(default = "default_max_boost")]
    pub max_boost: f64,
    /// Pointer influence distance in device pixels
    #[serde(default = "default_effect_radius")]
    pub effect_radius: f64,
}

fn default_light_theme() -> String {
    "default-light".to_string()
}

fn default_dark_theme() -> String {
    "default-dark".to_string()
}

fn default_spacing() -> f64 {
    10.0
}

fn default_base_radius() -> f64 {
    1.0
}

fn default_max_boost() -> f64 {
    2.0
}

fn default_effect_radius() -> f64 {
    100.0
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            light_theme: default_light_theme(),
            dark_theme: default_dark_theme(),
            spacing: default_spacing(),
            base_radius: default_base_radius(),
            max_boost: default_max_boost(),
            effect_radius: default_effect_radius(),
        }
    }
}

impl FieldConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load and sanitize a config file at an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: FieldConfig = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    /// Save config to the user config file
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace values the rasterizer cannot work with by their defaults
    ///
    /// Spacing must be at least [`MIN_SPACING`]. The base radius must be
    /// positive and the boost non-negative, and neither may exceed the
    /// spacing. The effect radius must be positive. Everything must be finite.
    pub fn sanitized(mut self) -> Self {
        fn fix(name: &str, value: &mut f64, valid: bool, default: f64) {
            if !valid {
                tracing::warn!("Invalid {} {}, using {}", name, value, default);
                *value = default;
            }
        }

        let spacing_ok = self.spacing.is_finite() && self.spacing >= MIN_SPACING;
        fix("spacing", &mut self.spacing, spacing_ok, default_spacing());
        let spacing = self.spacing;

        let base_ok =
            self.base_radius.is_finite() && self.base_radius > 0.0 && self.base_radius <= spacing;
        fix(
            "base_radius",
            &mut self.base_radius,
            base_ok,
            default_base_radius().min(spacing),
        );

        let boost_ok =
            self.max_boost.is_finite() && self.max_boost >= 0.0 && self.max_boost <= spacing;
        fix(
            "max_boost",
            &mut self.max_boost,
            boost_ok,
            default_max_boost().min(spacing),
        );

        let effect_ok = self.effect_radius.is_finite() && self.effect_radius > 0.0;
        fix(
            "effect_radius",
            &mut self.effect_radius,
            effect_ok,
            default_effect_radius(),
        );

        self
    }
}
