//! Reward table loading

use super::ConfigError;
use crate::rewards::RewardTable;
use std::path::Path;

fn validate(table: RewardTable) -> Result<RewardTable, ConfigError> {
    for tier in [&table.easy, &table.normal, &table.hard, &table.master] {
        if !(0.0..=1.0).contains(&tier.material_drop_chance) {
            return Err(ConfigError::ValidationError(format!(
                "material drop chance {} is outside 0..=1",
                tier.material_drop_chance
            )));
        }
    }
    Ok(table)
}

/// Load a reward table from a TOML file
pub fn load_reward_table(path: &Path) -> Result<RewardTable, ConfigError> {
    validate(super::load_toml(path)?)
}

/// Load a reward table from a TOML string
pub fn parse_reward_table(content: &str) -> Result<RewardTable, ConfigError> {
    validate(super::parse_toml(content)?)
}

/// Reward table shipped with the crate
///
/// Falls back to [`RewardTable::default`] if the embedded file does not parse.
pub fn default_reward_table() -> RewardTable {
    let toml = include_str!("../../config/rewards.toml");
    parse_reward_table(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "embedded reward table is invalid, using built-in rates");
        RewardTable::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_table_matches_builtin() {
        let toml = include_str!("../../config/rewards.toml");
        assert_eq!(parse_reward_table(toml).unwrap(), RewardTable::default());
    }

    #[test]
    fn test_bad_drop_chance() {
        let mut table = RewardTable::default();
        table.hard.material_drop_chance = 1.5;
        let toml = toml::to_string(&table).unwrap();
        assert!(matches!(
            parse_reward_table(&toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
