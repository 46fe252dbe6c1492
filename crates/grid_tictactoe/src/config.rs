//! Game configuration.

use super::types::{DEFAULT_SIZE, MAX_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Construction-time settings for a game.
///
/// Deserialized values go through the same validation as `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Side length N of the board.
    size: usize,
}

/// Unvalidated config as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawGameConfig {
    #[serde(default = "default_size")]
    size: usize,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self { size: raw.size }.validated()
    }
}

#[instrument]
fn default_size() -> usize {
    DEFAULT_SIZE
}

impl GameConfig {
    /// Creates a configuration for an N×N board.
    ///
    /// Sizes outside `1..=MAX_SIZE` are rejected.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        Self { size }.validated()
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    #[track_caller]
    fn validated(self) -> Result<Self, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::new(
                "Board size must be at least 1".to_string(),
            ));
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} exceeds the maximum of {}",
                self.size, MAX_SIZE
            )));
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
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
