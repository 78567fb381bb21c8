//! Display mode selection

use serde::{Deserialize, Serialize};

/// How a relation set is turned into tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayMode {
    /// Type-coerced table per relation name
    #[default]
    Logical,
    /// Key/value grid per relation sorted by relation id
    Physical,
    /// Untouched per-relation grid with a metadata side panel
    Raw,
    /// Logical tables split into panes
    Partitioned,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Logical,
        DisplayMode::Physical,
        DisplayMode::Raw,
        DisplayMode::Partitioned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Logical => "logical",
            DisplayMode::Physical => "physical",
            DisplayMode::Raw => "raw",
            DisplayMode::Partitioned => "partitioned",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a stored mode name to a display mode
///
/// Case and surrounding whitespace are ignored. Unknown names and `None`
/// fall back to [`DisplayMode::Logical`].
pub fn convert_display_mode(mode: Option<&str>) -> DisplayMode {
    let Some(mode) = mode else {
        return DisplayMode::Logical;
    };
    let mode = mode.trim();
    DisplayMode::ALL
        .into_iter()
        .find(|candidate| candidate.as_str().eq_ignore_ascii_case(mode))
        .unwrap_or_default()
}

impl From<&str> for DisplayMode {
    fn from(mode: &str) -> Self {
        convert_display_mode(Some(mode))
    }
}

impl From<String> for DisplayMode {
    fn from(mode: String) -> Self {
        convert_display_mode(Some(&mode))
    }
}

impl From<DisplayMode> for String {
    fn from(mode: DisplayMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Pane arrangement for [`DisplayMode::Partitioned`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionLayout {
    /// Panes side by side
    #[default]
    Horizontal,
    /// Panes stacked
    Vertical,
}
