//! Command-line argument parsing for the dot field window

use clap::{Parser, ValueEnum};

use crate::config::{FieldConfig, ThemePreference};

/// Ambient dot-grid background
#[derive(Parser, Debug)]
#[command(name = "dotfield", version, about = "Ambient dot-grid background")]
pub struct CliArgs {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280, value_name = "PX")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800, value_name = "PX")]
    pub height: u32,

    /// Color scheme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Open as a borderless fullscreen window
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Do not write log files to the config directory
    #[arg(long)]
    pub no_file_log: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    System,
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::System => ThemePreference::System,
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Logical window size
    pub window_size: (u32, u32),
    pub fullscreen: bool,
    pub file_logging: bool,
    /// Save the config instead of opening a window
    pub init_config: bool,
    /// Theme override from the command line
    pub theme: Option<ThemePreference>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        Ok(StartupConfig {
            window_size: (self.width, self.height),
            fullscreen: self.fullscreen,
            file_logging: !self.no_file_log,
            init_config: self.init_config,
            theme: self.theme.map(ThemePreference::from),
        })
    }
}

impl StartupConfig {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, mut config: FieldConfig) -> FieldConfig {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        config
    }
}
