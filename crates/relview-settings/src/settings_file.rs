//! Where settings, preferences and logs live on disk

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.toml";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
pub const LOG_DIR_NAME: &str = "logs";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("relview"))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|p| p.join("relview"))
}

pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join(SETTINGS_FILE_NAME))
}

pub fn preferences_file() -> Result<PathBuf> {
    data_dir().map(|p| preferences_file_in(&p))
}

pub fn preferences_file_in(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFERENCES_FILE_NAME)
}

pub fn log_dir() -> Result<PathBuf> {
    data_dir().map(|p| log_dir_in(&p))
}

pub fn log_dir_in(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR_NAME)
}

/// Create the config and data directories if missing
pub fn ensure_directories() -> Result<()> {
    for dir in [config_dir()?, data_dir()?] {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}
