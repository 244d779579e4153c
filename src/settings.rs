//! Storefront settings: tunables loaded from an optional TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::CarouselConfig;

/// User-configurable settings for a storefront session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StorefrontSettings {
    /// Milliseconds a carousel transition stays in flight.
    #[serde(default = "default_settle_delay_ms")]
    settle_delay_ms: u64,

    /// Drag distance (terminal columns) that must be exceeded to navigate.
    #[serde(default = "default_drag_threshold")]
    drag_threshold: i32,

    /// Catalog file to load instead of the built-in data.
    #[serde(default)]
    catalog: Option<PathBuf>,

    /// File that receives tracing output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_settle_delay_ms() -> u64 {
    300
}

#[instrument]
fn default_drag_threshold() -> i32 {
    6
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("chess_two.log")
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            drag_threshold: default_drag_threshold(),
            catalog: None,
            log_file: default_log_file(),
        }
    }
}

impl StorefrontSettings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            settle_delay_ms = settings.settle_delay_ms,
            drag_threshold = settings.drag_threshold,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Overrides the settle delay.
    #[instrument(skip(self))]
    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    /// Overrides the drag threshold.
    #[instrument(skip(self))]
    pub fn with_drag_threshold(mut self, drag_threshold: i32) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    /// Overrides the catalog path.
    #[instrument(skip(self))]
    pub fn with_catalog(mut self, catalog: PathBuf) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Overrides the log file path.
    #[instrument(skip(self))]
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Builds the carousel configuration these settings describe.
    #[instrument(skip(self))]
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig::new(
            Duration::from_millis(self.settle_delay_ms),
            self.drag_threshold,
        )
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
