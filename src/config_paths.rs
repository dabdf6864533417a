//! Where dotfield keeps its files
//!
//! Everything lives in one directory: `$XDG_CONFIG_HOME/dotfield`, falling
//! back to `~/.config/dotfield` (macOS included), or `%APPDATA%\dotfield` on
//! Windows. Inside it:
//!
//! ```text
//! config.yaml
//! themes/{id}.yaml
//! logs/dotfield.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "dotfield";
const THEMES_DIR: &str = "themes";
const LOGS_DIR: &str = "logs";
const CONFIG_FILE: &str = "config.yaml";

/// File name prefix used by the rolling log appender
pub const LOG_FILE_PREFIX: &str = "dotfield.log";

/// Resolve the app directory from the platform's config root
///
/// `xdg_config_home` wins over `home` when set and non-empty.
pub fn app_dir_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let root = match xdg_config_home {
        Some(xdg) if !xdg.as_os_str().is_empty() => xdg,
        _ => home?.join(".config"),
    };
    Some(root.join(APP_DIR))
}

/// Base config directory, `None` when no home directory can be found
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        app_dir_from(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::home_dir(),
        )
    }
}

pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(THEMES_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

fn create(path: &Path) -> Result<(), String> {
    std::fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the logs directory (and the config dir above it), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    create(&logs)?;
    Ok(logs)
}
