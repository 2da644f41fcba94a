//! Runtime configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mark;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Settings for the game client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Mark played by the computer. The human takes the other one.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_think_delay_ms() -> u64 {
    1000
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            computer_mark: default_computer_mark(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            think_delay_ms = config.think_delay_ms,
            computer_mark = %config.computer_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the computer's mark.
    pub fn with_computer_mark(mut self, mark: Mark) -> Self {
        self.computer_mark = mark;
        self
    }

    /// Replaces the think delay.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Think delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Mark played by the human in a game against the computer.
    pub fn human_mark(&self) -> Mark {
        self.computer_mark.opponent()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(*config.think_delay_ms(), 1000);
        assert_eq!(*config.computer_mark(), Mark::O);
        assert_eq!(config.human_mark(), Mark::X);
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("computer_mark = \"X\"").unwrap();
        assert_eq!(*config.computer_mark(), Mark::X);
        assert_eq!(config.think_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().contains("boom"));
    }
}
