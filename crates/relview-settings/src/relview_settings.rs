//! relview Settings - Configuration and UI preference storage
//!
//! - [`ConsoleSettings`] - TOML settings file with defaults for every field
//! - [`Preferences`] - Best-effort key/value cache for UI preferences
//! - [`settings_file`] - Standard config/data directory locations

mod preferences;
mod settings;
pub mod settings_file;

pub use preferences::{
    FileBackend, MemoryBackend, PreferenceBackend, Preferences, StorageError,
    StorageResult,
};
pub use settings::{ConsoleSettings, LogSettings, OutputSettings, PreferenceSettings};
