//! Configuration loaded from an optional TOML file.

use game_rules::GameRules;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for a console run.
///
/// ```toml
/// map_path = "map_for_game.json"
/// result_path = "game_result.csv"
/// log_filter = "game_rules=debug"
///
/// [rules]
/// time_budget = "1234567890.0987654321"
/// win_experience = 280
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// JSON map to play.
    pub map_path: PathBuf,

    /// CSV file receiving one row per location transition. Truncated on start.
    pub result_path: PathBuf,

    /// `tracing` filter directive; logs go to stderr.
    pub log_filter: String,

    pub rules: GameRules,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("map_for_game.json"),
            result_path: PathBuf::from("game_result.csv"),
            log_filter: "warn".to_string(),
            rules: GameRules::default(),
        }
    }
}

impl ConsoleConfig {
    /// Configuration file looked up in the working directory.
    pub const FILE_NAME: &'static str = "dungeon.toml";

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Read a configuration file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }
}
