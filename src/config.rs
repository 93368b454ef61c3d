//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Milliseconds the move highlight stays visible; 0 disables expiry.
    #[serde(default = "default_highlight_expiry_ms")]
    highlight_expiry_ms: u64,

    /// Log destination while the UI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_highlight_expiry_ms() -> u64 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_replay.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            highlight_expiry_ms: default_highlight_expiry_ms(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(highlight_expiry_ms = config.highlight_expiry_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, highlight_ms: Option<u64>, log_file: Option<PathBuf>) -> Self {
        if let Some(ms) = highlight_ms {
            self.highlight_expiry_ms = ms;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// How long a highlight stays visible, `None` when it never expires.
    pub fn highlight_expiry(&self) -> Option<Duration> {
        (self.highlight_expiry_ms > 0).then(|| Duration::from_millis(self.highlight_expiry_ms))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
