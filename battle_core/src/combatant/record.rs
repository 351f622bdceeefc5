//! Avatar and ability records as supplied by the persistence layer
//!
//! Records arrive loosely typed (every numeric field optional) and are
//! validated once when a battle is created.

use super::ability::{Ability, AbilityTier, StatusEffect, DEFAULT_HIT_CHANCE};
use crate::error::BattleError;
use crate::stats::constants::MAX_METER;
use crate::stats::{check_readiness, Readiness};
use crate::types::{Attributes, Element, Rarity, StatKind};
use serde::{Deserialize, Serialize};

/// Highest level an avatar can reach
pub const MAX_LEVEL: f64 = 1000.0;

/// Highest raw attribute value accepted from a record
pub const MAX_ATTRIBUTE: f64 = 100_000.0;

/// Raw avatar record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub rarity: Option<Rarity>,
    #[serde(default)]
    pub level: Option<f64>,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub agility: Option<f64>,
    #[serde(default)]
    pub vitality: Option<f64>,
    #[serde(default)]
    pub focus: Option<f64>,
    #[serde(default)]
    pub abilities: Vec<AbilityRecord>,
    #[serde(default)]
    pub fatigue: Option<f64>,
    #[serde(default)]
    pub bond: Option<f64>,
    #[serde(default)]
    pub death_mark: bool,
    #[serde(default = "default_alive")]
    pub alive: bool,
}

fn default_alive() -> bool {
    true
}

impl Default for AvatarRecord {
    fn default() -> Self {
        AvatarRecord {
            id: None,
            name: None,
            element: None,
            rarity: None,
            level: None,
            power: None,
            agility: None,
            vitality: None,
            focus: None,
            abilities: Vec::new(),
            fatigue: None,
            bond: None,
            death_mark: false,
            alive: default_alive(),
        }
    }
}

/// Raw ability record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilityRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_damage: Option<f64>,
    #[serde(default)]
    pub primary_stat: Option<StatKind>,
    #[serde(default)]
    pub stat_multiplier: Option<f64>,
    #[serde(default)]
    pub energy_cost: Option<f64>,
    #[serde(default)]
    pub hit_chance: Option<f64>,
    #[serde(default)]
    pub status_effects: Vec<StatusEffect>,
    #[serde(default)]
    pub tier: AbilityTier,
}

/// Validated numeric fields of an avatar
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedAvatar {
    pub name: String,
    pub element: Element,
    pub rarity: Rarity,
    pub level: u32,
    pub attributes: Attributes,
    pub abilities: Vec<Ability>,
    pub fatigue: u32,
    pub bond: u32,
    pub death_mark: bool,
}

fn label(kind: &str, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{} '{}'", kind, name),
        _ => kind.to_string(),
    }
}

fn require<T>(record: &str, field: &'static str, value: Option<T>) -> Result<T, BattleError> {
    value.ok_or_else(|| BattleError::MissingField {
        record: record.to_string(),
        field,
    })
}

fn in_range(record: &str, field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, BattleError> {
    if !value.is_finite() {
        return Err(BattleError::InvalidNumber {
            record: record.to_string(),
            field,
        });
    }
    if value < min || value > max {
        return Err(BattleError::OutOfRange {
            record: record.to_string(),
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

fn whole(record: &str, field: &'static str, value: Option<f64>, min: f64, max: f64) -> Result<u32, BattleError> {
    let value = require(record, field, value)?;
    Ok(in_range(record, field, value, min, max)?.floor() as u32)
}

impl AbilityRecord {
    /// Validate into an [`Ability`], filling documented defaults
    pub fn validate(&self) -> Result<Ability, BattleError> {
        let record = label("ability", self.name.as_deref());
        let name = require(&record, "name", self.name.clone())?;
        if name.trim().is_empty() {
            return Err(BattleError::EmptyName { record });
        }

        let base_damage = whole(&record, "base_damage", self.base_damage, 0.0, MAX_ATTRIBUTE)?;
        let energy_cost = whole(&record, "energy_cost", self.energy_cost, 0.0, MAX_METER as f64)?;
        let stat_multiplier = in_range(&record, "stat_multiplier", self.stat_multiplier.unwrap_or(1.0), 0.0, 100.0)?;
        let hit_chance = in_range(&record, "hit_chance", self.hit_chance.unwrap_or(DEFAULT_HIT_CHANCE), 0.0, 100.0)?;

        for effect in &self.status_effects {
            in_range(&record, "status_effects.magnitude", effect.magnitude, 0.0, MAX_ATTRIBUTE)?;
        }

        Ok(Ability {
            name,
            base_damage,
            primary_stat: self.primary_stat.unwrap_or_default(),
            stat_multiplier,
            energy_cost,
            hit_chance,
            status_effects: self.status_effects.clone(),
            tier: self.tier,
        })
    }
}

impl From<&Ability> for AbilityRecord {
    fn from(ability: &Ability) -> Self {
        AbilityRecord {
            name: Some(ability.name.clone()),
            base_damage: Some(ability.base_damage as f64),
            primary_stat: Some(ability.primary_stat),
            stat_multiplier: Some(ability.stat_multiplier),
            energy_cost: Some(ability.energy_cost as f64),
            hit_chance: Some(ability.hit_chance),
            status_effects: ability.status_effects.clone(),
            tier: ability.tier,
        }
    }
}

impl AvatarRecord {
    /// Whether this avatar may enter a training battle
    pub fn readiness(&self) -> Readiness {
        check_readiness(self.fatigue_level(), self.alive)
    }

    /// Fatigue as a whole meter value; missing or malformed reads as rested
    pub(crate) fn fatigue_level(&self) -> u32 {
        match self.fatigue {
            Some(f) if f.is_finite() => f.clamp(0.0, MAX_METER as f64) as u32,
            _ => 0,
        }
    }

    /// Refuse a dead or exhausted avatar before a battle is built
    pub(crate) fn ensure_ready(&self) -> Result<(), BattleError> {
        match self.readiness() {
            Readiness::Blocked(reason) => Err(self.not_ready(reason)),
            Readiness::Ready | Readiness::Warned(_) => Ok(()),
        }
    }

    pub(crate) fn not_ready(&self, reason: impl Into<String>) -> BattleError {
        BattleError::NotReady {
            record: label("avatar", self.name.as_deref()),
            reason: reason.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<ValidatedAvatar, BattleError> {
        let record = label("avatar", self.name.as_deref());
        let name = require(&record, "name", self.name.clone())?;
        if name.trim().is_empty() {
            return Err(BattleError::EmptyName { record });
        }

        let element = require(&record, "element", self.element)?;
        let rarity = require(&record, "rarity", self.rarity)?;
        let level = whole(&record, "level", self.level, 1.0, MAX_LEVEL)?;
        let attributes = Attributes {
            power: whole(&record, "power", self.power, 0.0, MAX_ATTRIBUTE)?,
            agility: whole(&record, "agility", self.agility, 0.0, MAX_ATTRIBUTE)?,
            vitality: whole(&record, "vitality", self.vitality, 0.0, MAX_ATTRIBUTE)?,
            focus: whole(&record, "focus", self.focus, 0.0, MAX_ATTRIBUTE)?,
        };
        let fatigue = whole(&record, "fatigue", Some(self.fatigue.unwrap_or(0.0)), 0.0, MAX_METER as f64)?;
        let bond = whole(&record, "bond", Some(self.bond.unwrap_or(0.0)), 0.0, MAX_METER as f64)?;

        let abilities = self
            .abilities
            .iter()
            .map(AbilityRecord::validate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedAvatar {
            name,
            element,
            rarity,
            level,
            attributes,
            abilities,
            fatigue,
            bond,
            death_mark: self.death_mark,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AvatarRecord {
        AvatarRecord {
            name: Some("Ignis".to_string()),
            element: Some(Element::Fire),
            rarity: Some(Rarity::Rare),
            level: Some(5.0),
            power: Some(20.0),
            agility: Some(12.0),
            vitality: Some(15.0),
            focus: Some(9.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_validates() {
        let avatar = complete().validate().unwrap();
        assert_eq!(avatar.level, 5);
        assert_eq!(avatar.attributes, Attributes::new(20, 12, 15, 9));
        assert_eq!(avatar.fatigue, 0);
        assert_eq!(avatar.bond, 0);
    }

    #[test]
    fn test_missing_stat_is_reported() {
        let mut record = complete();
        record.vitality = None;
        let err = record.validate().unwrap_err();
        assert_eq!(
            err,
            BattleError::MissingField {
                record: "avatar 'Ignis'".to_string(),
                field: "vitality"
            }
        );
    }

    #[test]
    fn test_out_of_range_fatigue() {
        let mut record = complete();
        record.fatigue = Some(140.0);
        assert!(matches!(
            record.validate(),
            Err(BattleError::OutOfRange { field: "fatigue", .. })
        ));
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut record = complete();
        record.power = Some(f64::NAN);
        assert!(matches!(
            record.validate(),
            Err(BattleError::InvalidNumber { field: "power", .. })
        ));
    }

    #[test]
    fn test_ability_defaults() {
        let record = AbilityRecord {
            name: Some("Spark".to_string()),
            base_damage: Some(20.0),
            energy_cost: Some(15.0),
            ..Default::default()
        };
        let ability = record.validate().unwrap();
        assert_eq!(ability.primary_stat, StatKind::Power);
        assert!((ability.stat_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((ability.hit_chance - DEFAULT_HIT_CHANCE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ability_missing_cost() {
        let record = AbilityRecord {
            name: Some("Spark".to_string()),
            base_damage: Some(20.0),
            ..Default::default()
        };
        assert!(matches!(
            record.validate(),
            Err(BattleError::MissingField { field: "energy_cost", .. })
        ));
    }

    #[test]
    fn test_default_record_is_alive() {
        assert!(AvatarRecord::default().alive);
        let parsed: AvatarRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.alive, AvatarRecord::default().alive);
        assert_eq!(complete().readiness(), Readiness::Ready);
    }

    #[test]
    fn test_readiness_from_record() {
        let mut record = complete();
        assert!(record.readiness().can_fight());
        record.fatigue = Some(85.0);
        assert!(!record.readiness().can_fight());
        record.fatigue = None;
        record.alive = false;
        assert!(!record.readiness().can_fight());
    }

    #[test]
    fn test_ensure_ready() {
        let mut record = complete();
        record.fatigue = Some(65.0);
        assert!(record.ensure_ready().is_ok());

        record.fatigue = Some(100.0);
        assert!(matches!(record.ensure_ready(), Err(BattleError::NotReady { .. })));

        record.fatigue = None;
        record.alive = false;
        let err = record.ensure_ready().unwrap_err();
        assert_eq!(
            err.to_string(),
            "avatar 'Ignis' cannot fight: Avatar is dead and must be resurrected first"
        );
    }

    #[test]
    fn test_bad_ability_fails_avatar() {
        let mut record = complete();
        record.abilities.push(AbilityRecord {
            name: Some("Broken".to_string()),
            ..Default::default()
        });
        assert!(record.validate().is_err());
    }
}
