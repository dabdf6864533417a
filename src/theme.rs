//! Theme system for the dot field
//!
//! A theme is a pair of colors: the dot base color and the page background
//! the buffer is composited over. Themes are YAML, either embedded at compile
//! time or loaded from the user's config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/dotfield/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::{Deserialize, Serialize};

// Embed theme YAML files at compile time
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const HIGH_CONTRAST_LIGHT_YAML: &str = include_str!("../themes/high-contrast-light.yaml");
pub const HIGH_CONTRAST_DARK_YAML: &str = include_str!("../themes/high-contrast-dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "high-contrast-light",
        yaml: HIGH_CONTRAST_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "high-contrast-dark",
        yaml: HIGH_CONTRAST_DARK_YAML,
    },
];

/// The active color scheme. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Map a "prefers dark" flag from the host to a mode
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with full opacity
    pub const fn with_opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Convert to 0x00RRGGBB for softbuffer
    pub fn to_rgb_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub colors: ColorsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColorsData {
    pub dot: String,
    pub background: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    /// Base color written into every splat; its alpha comes from the falloff
    pub dot: Color,
    /// Opaque page color the RGBA buffer is composited over
    pub background: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }
        Ok(Theme {
            name: data.name,
            dot: Color::from_hex(&data.colors.dot)?,
            background: Color::from_hex(&data.colors.background)?.with_opaque(),
        })
    }

    /// Default light theme (YAML-backed with Rust fallback)
    pub fn default_light() -> Self {
        Theme::from_yaml(DEFAULT_LIGHT_YAML).unwrap_or_else(|_| Theme {
            name: "Default Light".to_string(),
            dot: Color::rgb(0xDC, 0xE0, 0xE8),
            background: Color::rgb(0xEF, 0xF1, 0xF5),
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        Theme::from_yaml(DEFAULT_DARK_YAML).unwrap_or_else(|_| Theme {
            name: "Default Dark".to_string(),
            dot: Color::rgb(0x45, 0x47, 0x5A),
            background: Color::rgb(0x1E, 0x1E, 0x2E),
        })
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::debug!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// The light and dark themes resolved for one session
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub light: Theme,
    pub dark: Theme,
}

impl Palette {
    /// Resolve both themes by id, falling back to the defaults on failure
    pub fn load(light_id: &str, dark_id: &str) -> Self {
        let light = load_theme(light_id).unwrap_or_else(|e| {
            tracing::warn!("Failed to load light theme '{}': {}", light_id, e);
            Theme::default_light()
        });
        let dark = load_theme(dark_id).unwrap_or_else(|e| {
            tracing::warn!("Failed to load dark theme '{}': {}", dark_id, e);
            Theme::default_dark()
        });
        Self { light, dark }
    }

    pub fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: Theme::default_light(),
            dark: Theme::default_dark(),
        }
    }
}
