//! Ability catalog loading

use super::ConfigError;
use crate::combatant::{Ability, AbilityRecord};
use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Validated abilities per element
pub type AbilityCatalog = HashMap<Element, Vec<Ability>>;

/// Raw catalog file: `[[abilities.<element>]]` tables
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AbilitiesConfig {
    abilities: HashMap<String, Vec<AbilityRecord>>,
}

fn validate(config: AbilitiesConfig) -> Result<AbilityCatalog, ConfigError> {
    let mut catalog = HashMap::new();
    for (name, records) in config.abilities {
        let element: Element = name.parse().map_err(ConfigError::ValidationError)?;
        let abilities = records
            .iter()
            .map(AbilityRecord::validate)
            .collect::<Result<Vec<_>, _>>()?;
        catalog.insert(element, abilities);
    }
    Ok(catalog)
}

/// Load the ability catalog from a TOML file
pub fn load_ability_catalog(path: &Path) -> Result<AbilityCatalog, ConfigError> {
    let config: AbilitiesConfig = super::load_toml(path)?;
    validate(config)
}

/// Load the ability catalog from a TOML string
pub fn parse_ability_catalog(content: &str) -> Result<AbilityCatalog, ConfigError> {
    let config: AbilitiesConfig = super::parse_toml(content)?;
    validate(config)
}

/// Built-in ability catalog
///
/// Falls back to the basic attack for every element if the embedded file
/// cannot be parsed.
pub fn default_abilities() -> AbilityCatalog {
    let toml = include_str!("../../config/abilities.toml");
    parse_ability_catalog(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "embedded ability catalog is invalid, using basic attacks");
        Element::all()
            .iter()
            .map(|&element| (element, vec![Ability::basic_attack()]))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{AbilityTier, EffectKind};
    use crate::types::StatKind;

    #[test]
    fn test_parse_catalog() {
        let toml = r#"
[[abilities.fire]]
name = "Ember"
base_damage = 20
energy_cost = 15

[[abilities.fire]]
name = "Inferno"
base_damage = 70
stat_multiplier = 2.0
energy_cost = 60
hit_chance = 85
tier = "ultimate"

[[abilities.fire.status_effects]]
kind = "burn"
magnitude = 6.0
turns = 2
"#;

        let catalog = parse_ability_catalog(toml).unwrap();
        let fire = &catalog[&Element::Fire];
        assert_eq!(fire.len(), 2);
        assert_eq!(fire[0].primary_stat, StatKind::Power);
        assert!((fire[0].hit_chance - 95.0).abs() < f64::EPSILON);
        assert_eq!(fire[1].tier, AbilityTier::Ultimate);
        assert_eq!(fire[1].status_effects[0].kind, EffectKind::Burn);
    }

    #[test]
    fn test_invalid_ability_is_rejected() {
        let toml = r#"
[[abilities.water]]
name = "Drip"
base_damage = 5
"#;
        assert!(matches!(
            parse_ability_catalog(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_catalog_covers_elements() {
        let catalog = default_abilities();
        for element in Element::all() {
            let abilities = &catalog[element];
            assert!(abilities.len() >= 3, "{} has too few abilities", element);
            assert!(abilities.iter().any(|a| a.is_ultimate()), "{} has no ultimate", element);
        }
    }
}
