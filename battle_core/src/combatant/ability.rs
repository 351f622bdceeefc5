//! Abilities - Static per-element attack data

use crate::combatant::buff::EffectKind;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Default base hit chance (percent)
pub const DEFAULT_HIT_CHANCE: f64 = 95.0;

/// Special tier marker for an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityTier {
    #[default]
    Normal,
    Ultimate,
}

/// Status effect carried by an ability, applied when it lands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: EffectKind,
    /// Damage/heal per turn, or mitigation percent for defense
    pub magnitude: f64,
    /// Number of turn boundaries the effect lasts
    pub turns: u32,
}

/// An ability a combatant can use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub base_damage: u32,
    /// Attribute the ability scales with
    pub primary_stat: StatKind,
    pub stat_multiplier: f64,
    pub energy_cost: u32,
    /// Base chance to hit, in percent
    pub hit_chance: f64,
    #[serde(default)]
    pub status_effects: Vec<StatusEffect>,
    #[serde(default)]
    pub tier: AbilityTier,
}

impl Ability {
    pub fn is_ultimate(&self) -> bool {
        self.tier == AbilityTier::Ultimate
    }

    pub fn has_status_effects(&self) -> bool {
        !self.status_effects.is_empty()
    }

    /// The zero-cost fallback every combatant can always use
    ///
    /// Scales at half the multiplier of a regular ability.
    pub fn basic_attack() -> Self {
        Ability {
            name: "Basic Attack".to_string(),
            base_damage: 10,
            primary_stat: StatKind::Power,
            stat_multiplier: 0.5,
            energy_cost: 0,
            hit_chance: DEFAULT_HIT_CHANCE,
            status_effects: Vec::new(),
            tier: AbilityTier::Normal,
        }
    }
}
