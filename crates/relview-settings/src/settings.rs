//! Console settings
//!
//! Settings live in `settings.toml` under the config directory. Every field
//! has a default, so a partial file is valid:
//!
//! ```toml
//! [output]
//! default_display_mode = "physical"
//! diagnostic_duplicate_cap = 5
//!
//! [logging]
//! filter = "debug"
//! ```

use crate::settings_file;
use anyhow::{Context, Result};
use relview_output::{DisplayMode, PartitionLayout, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    pub output: OutputSettings,
    pub preferences: PreferenceSettings,
    pub logging: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Unknown mode names fall back to logical
    pub default_display_mode: DisplayMode,
    pub partition_layout: PartitionLayout,
    /// Copies kept of each repeated diagnostic
    pub diagnostic_duplicate_cap: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            default_display_mode: DisplayMode::Logical,
            partition_layout: PartitionLayout::Horizontal,
            diagnostic_duplicate_cap: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    /// Size limit for stored preferences; unlimited when absent
    pub quota_bytes: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Also write JSON logs to the data directory
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl ConsoleSettings {
    /// Read settings from a TOML file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse settings TOML {:?}", path))
    }

    /// Read settings, logging and falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), "Using default settings: {:#}", err);
            Self::default()
        })
    }

    /// Load from the standard settings file location
    pub fn load() -> Self {
        match settings_file::settings_file() {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => {
                tracing::warn!("Using default settings: {:#}", err);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }

    /// Render options for a given display mode, or the configured default
    pub fn render_options(&self, mode: Option<DisplayMode>) -> RenderOptions {
        RenderOptions {
            mode: mode.unwrap_or(self.output.default_display_mode),
            partition_layout: self.output.partition_layout,
            diagnostic_duplicate_cap: self.output.diagnostic_duplicate_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ConsoleSettings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, ConsoleSettings::default());
        assert_eq!(settings.output.diagnostic_duplicate_cap, 3);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[output]\ndefault_display_mode = \"Physical\"\npartition_layout = \"vertical\"\n",
        )
        .unwrap();

        let settings = ConsoleSettings::load_from(&path).unwrap();
        assert_eq!(settings.output.default_display_mode, DisplayMode::Physical);
        assert_eq!(settings.output.partition_layout, PartitionLayout::Vertical);
        assert_eq!(settings.logging, LogSettings::default());
    }

    #[test]
    fn test_unknown_display_mode_falls_back_to_logical() {
        let settings: ConsoleSettings =
            toml::from_str("[output]\ndefault_display_mode = \"spreadsheet\"\n").unwrap();
        assert_eq!(settings.output.default_display_mode, DisplayMode::Logical);
    }

    #[test]
    fn test_invalid_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[output\nnot toml").unwrap();

        assert!(ConsoleSettings::load_from(&path).is_err());
        assert_eq!(ConsoleSettings::load_or_default(&path), ConsoleSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut settings = ConsoleSettings::default();
        settings.output.default_display_mode = DisplayMode::Partitioned;
        settings.preferences.quota_bytes = Some(4096);

        settings.save_to(&path).unwrap();
        assert_eq!(ConsoleSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_render_options_prefer_explicit_mode() {
        let settings = ConsoleSettings::default();
        assert_eq!(settings.render_options(None).mode, DisplayMode::Logical);
        assert_eq!(
            settings.render_options(Some(DisplayMode::Raw)).mode,
            DisplayMode::Raw
        );
    }
}
