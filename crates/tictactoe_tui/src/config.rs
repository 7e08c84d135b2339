//! Game settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// User-configurable settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Pause before the computer's move is applied, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Highlight the recommended reply after each computer move.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_show_hints() -> bool {
    true
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            show_hints: default_show_hints(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            computer_delay_ms = settings.computer_delay_ms,
            show_hints = settings.show_hints,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the computer delay.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Overrides whether hints are shown.
    pub fn with_show_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// The computer delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
