//! Tracing setup driven by the `[logging]` settings section
//!
//! A pretty console layer is always installed. With `json = true` a second
//! layer writes JSON lines to a daily-rotated file under the data directory.
//! `RUST_LOG`, when set, overrides the configured filter.

use anyhow::Context;
use relview_settings::LogSettings;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FILE_PREFIX: &str = "relview.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Directory for JSON log files; no file layer when `None`
    pub json_dir: Option<PathBuf>,
    /// File and line on console events, and span open/close events
    pub verbose_console: bool,
}

impl LoggingConfig {
    pub fn from_settings(settings: &LogSettings, log_dir: PathBuf) -> Self {
        Self {
            filter: settings.filter.clone(),
            json_dir: settings.json.then_some(log_dir),
            verbose_console: cfg!(debug_assertions),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter))
    }
}

/// Flushes the JSON log file when dropped; hold it until shutdown
#[derive(Debug)]
pub struct LoggingGuard {
    _json_writer: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let span_events = if config.verbose_console {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let mut layers = vec![
        fmt::layer()
            .with_target(true)
            .with_file(config.verbose_console)
            .with_line_number(config.verbose_console)
            .with_span_events(span_events)
            .pretty()
            .with_filter(config.env_filter())
            .boxed(),
    ];

    let mut json_writer = None;
    if let Some(dir) = &config.json_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));
        json_writer = Some(guard);

        layers.push(
            fmt::layer()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_writer(writer)
                .with_filter(config.env_filter())
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Logging was already initialized")?;

    tracing::info!(
        filter = %config.filter,
        json_dir = ?config.json_dir,
        "logging initialized"
    );

    Ok(LoggingGuard {
        _json_writer: json_writer,
    })
}
