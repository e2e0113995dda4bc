//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session, loaded from TOML.
///
/// Every key is optional:
///
/// ```toml
/// mode = "human-vs-computer"
/// computer_delay_ms = 500
/// log_file = "noughts.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Opponent mode at start-up.
    #[serde(default)]
    mode: Mode,

    /// Pause before the computer's reply, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Log destination while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            computer_delay_ms: default_computer_delay_ms(),
            log_file: default_log_file(),
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

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, delay_ms = config.computer_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
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

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, mode: Option<Mode>, computer_delay_ms: Option<u64>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }

    /// Pause before the computer's reply.
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
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_all_keys() {
        let config = AppConfig::from_toml(
            "mode = \"human-vs-computer\"\ncomputer_delay_ms = 0\nlog_file = \"game.log\"\n",
        )
        .unwrap();
        assert_eq!(*config.mode(), Mode::HumanVsComputer);
        assert_eq!(*config.computer_delay_ms(), 0);
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = AppConfig::from_toml("mode = \"easy\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(Some(Mode::HumanVsComputer), Some(10));
        assert_eq!(*config.mode(), Mode::HumanVsComputer);
        assert_eq!(config.computer_delay(), Duration::from_millis(10));
    }
}
