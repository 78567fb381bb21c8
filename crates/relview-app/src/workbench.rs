//! The console workbench
//!
//! A [`Workbench`] ties one settings snapshot, the preference store and the
//! console state together, and renders transaction results with the display
//! mode the user last picked.

use crate::logging::{self, LoggingConfig, LoggingGuard};
use anyhow::{Context, Result};
use relview_core::{Relation, relations_from_json};
use relview_models::ModelNode;
use relview_output::{DisplayMode, Output, RenderOptions, convert_display_mode, render_output};
use relview_settings::{
    ConsoleSettings, FileBackend, PreferenceBackend, Preferences, settings_file,
};
use relview_state::{Action, ConsoleBackend, ConsoleState, ResourceKind, Store, Worksheet};
use std::path::Path;
use uuid::Uuid;

/// Preference key holding the last chosen display mode
pub const DISPLAY_MODE_KEY: &str = "displayMode";

pub struct Workbench<B: PreferenceBackend> {
    settings: ConsoleSettings,
    preferences: Preferences<B>,
    store: Store,
}

impl Workbench<FileBackend> {
    /// Open the workbench with settings and preferences from the standard locations
    pub fn open() -> Result<Self> {
        settings_file::ensure_directories()?;
        let data_dir = settings_file::data_dir()?;
        Ok(Self::open_in(ConsoleSettings::load(), &data_dir))
    }

    /// Install logging from the settings, then open the workbench
    ///
    /// The returned guard flushes the log file and must outlive the workbench.
    pub fn start() -> Result<(Self, LoggingGuard)> {
        settings_file::ensure_directories()?;
        let data_dir = settings_file::data_dir()?;
        let settings = ConsoleSettings::load();
        let config =
            LoggingConfig::from_settings(&settings.logging, settings_file::log_dir_in(&data_dir));
        let guard = logging::init(&config)?;
        Ok((Self::open_in(settings, &data_dir), guard))
    }

    /// Open with preferences kept in `data_dir`
    pub fn open_in(settings: ConsoleSettings, data_dir: &Path) -> Self {
        let path = settings_file::preferences_file_in(data_dir);
        tracing::debug!(path = %path.display(), "opening preferences");
        let backend = FileBackend::open(path, settings.preferences.quota_bytes);
        Self::new(settings, backend)
    }
}

impl<B: PreferenceBackend> Workbench<B> {
    pub fn new(settings: ConsoleSettings, backend: B) -> Self {
        Self {
            settings,
            preferences: Preferences::new(backend),
            store: Store::new(),
        }
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    pub fn preferences(&self) -> &Preferences<B> {
        &self.preferences
    }

    pub fn state(&self) -> &ConsoleState {
        self.store.state()
    }

    /// The stored display mode, or the configured default when none is stored
    pub fn display_mode(&self) -> DisplayMode {
        match self.preferences.get::<String>(DISPLAY_MODE_KEY) {
            Some(stored) => convert_display_mode(Some(&stored)),
            None => self.settings.output.default_display_mode,
        }
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        tracing::debug!(mode = %mode, "display mode changed");
        self.preferences.set(DISPLAY_MODE_KEY, &mode.as_str());
    }

    pub fn render_options(&self) -> RenderOptions {
        self.settings.render_options(Some(self.display_mode()))
    }

    /// Render transaction results in the current display mode
    pub fn render_results(&self, relations: &[Relation]) -> Output {
        render_output(relations, &self.render_options())
    }

    /// Render results delivered as a JSON relation list
    pub fn render_json(&self, json: &str) -> Result<Output> {
        let relations = relations_from_json(json).context("Failed to decode relations")?;
        Ok(self.render_results(&relations))
    }

    /// Render results for a worksheet, in the worksheet's own display mode
    pub fn render_worksheet(&self, worksheet_id: Uuid, relations: &[Relation]) -> Output {
        let options = match self.store.state().worksheet(worksheet_id) {
            Some(worksheet) => self.settings.render_options(Some(worksheet.display_mode)),
            None => {
                tracing::debug!(worksheet_id = %worksheet_id, "unknown worksheet, using current display mode");
                self.render_options()
            }
        };
        render_output(relations, &options)
    }

    pub fn save_worksheet(&mut self, worksheet: Worksheet) {
        self.store.dispatch(Action::WorksheetUpdated(worksheet));
    }

    pub fn mark_notification_read(&mut self, id: Uuid) {
        self.store.dispatch(Action::NotificationRead(id));
    }

    pub fn fetch(&mut self, kind: ResourceKind, backend: &dyn ConsoleBackend) -> bool {
        self.store.fetch(kind, backend)
    }

    pub fn refresh(&mut self, backend: &dyn ConsoleBackend) -> usize {
        self.store.refresh_all(backend)
    }

    /// The model folder tree, ready for a tree view
    pub fn model_tree(&self) -> Vec<ModelNode> {
        self.store.model_tree().render()
    }
}
