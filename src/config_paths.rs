//! Centralized configuration paths for bracken
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/bracken/`
//! - Windows: `%APPDATA%\bracken\`
//!
//! This module is the single source of truth for config paths.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "bracken";

/// Base config directory for bracken
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/bracken`
///   - Else: `~/.config/bracken`
///
/// Windows:
///   - `%APPDATA%\bracken`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/bracken/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/bracken/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return its path
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| anyhow::anyhow!("no config directory available"))?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
