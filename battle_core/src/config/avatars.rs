//! Avatar records in the JSON shape the persistence layer hands over

use super::ConfigError;
use crate::combatant::AvatarRecord;
use std::fs;
use std::path::Path;

pub fn parse_avatar_json(content: &str) -> Result<AvatarRecord, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_avatar_json(path: &Path) -> Result<AvatarRecord, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_avatar_json(&content)
}

/// Parse a JSON array of avatar records
pub fn parse_roster_json(content: &str) -> Result<Vec<AvatarRecord>, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_roster_json(path: &Path) -> Result<Vec<AvatarRecord>, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_roster_json(&content)
}
