//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calculate::DEFAULT_TEAM_SIZE;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Roster expectations applied during team aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Members each team must have for a match to be scored
    #[serde(default = "default_team_size")]
    pub expected_team_size: usize,
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            expected_team_size: default_team_size(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data Dragon champion dataset
    #[serde(default = "default_champions_path")]
    pub champions_path: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub roster: RosterConfig,
}

fn default_champions_path() -> PathBuf {
    PathBuf::from("./data/champions.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            champions_path: default_champions_path(),
            log_level: default_log_level(),
            roster: RosterConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.expected_team_size == 0 {
            return Err(ConfigError::ValidationError(
                "Expected team size must be greater than 0".to_string(),
            ));
        }

        if self.champions_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Champion data path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
