//! Configuration loading from TOML and JSON files

mod abilities;
mod avatars;
mod rewards;

pub use abilities::{default_abilities, load_ability_catalog, parse_ability_catalog, AbilityCatalog};
pub use avatars::{load_avatar_json, load_roster_json, parse_avatar_json, parse_roster_json};
pub use rewards::{default_reward_table, load_reward_table, parse_reward_table};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

impl From<crate::error::BattleError> for ConfigError {
    fn from(err: crate::error::BattleError) -> Self {
        ConfigError::ValidationError(err.to_string())
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
