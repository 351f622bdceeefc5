//! Damage and critical-hit calculation

use super::constants::*;
use crate::combatant::{Ability, Combatant, EffectKind};
use crate::element::affinity_multiplier;
use crate::rng::RandomSource;

/// Damage amplifier from the attacker's bond with its owner
fn bond_multiplier(bond: u32) -> f64 {
    if bond >= 80 {
        1.2
    } else if bond >= 60 {
        1.1
    } else {
        1.0
    }
}

/// Damage penalty from the attacker's fatigue
fn fatigue_multiplier(fatigue: u32) -> f64 {
    if fatigue >= 80 {
        0.5
    } else if fatigue >= 60 {
        0.75
    } else {
        1.0
    }
}

/// Compute final damage of `ability` from `attacker` against `defender`
///
/// Steps, in order:
/// 1. base damage + primary stat * multiplier + level * 2
/// 2. elemental affinity
/// 3. critical multiplier
/// 4. mitigation: min(vitality * 0.5, damage * 0.5), scaled up by an active
///    defense buff on the defender
/// 5. attacker bond amplifier
/// 6. attacker fatigue penalty
/// 7. floor, minimum 1
pub fn compute_damage(attacker: &Combatant, ability: &Ability, defender: &Combatant, is_critical: bool) -> u32 {
    let stat = attacker.attributes.get(ability.primary_stat) as f64;
    let mut damage = ability.base_damage as f64
        + stat * ability.stat_multiplier
        + attacker.level as f64 * DAMAGE_PER_LEVEL;

    damage *= affinity_multiplier(attacker.element, defender.element);

    if is_critical {
        damage *= CRITICAL_MULTIPLIER;
    }

    let mut mitigation =
        (defender.attributes.vitality as f64 * MITIGATION_RATIO).min(damage * MITIGATION_RATIO);
    if let Some(defense) = defender.active_buff(EffectKind::Defense) {
        mitigation *= 1.0 + defense.magnitude / 100.0;
    }
    damage -= mitigation;

    damage *= bond_multiplier(attacker.bond);
    damage *= fatigue_multiplier(attacker.fatigue);

    let damage = damage.floor();
    if damage < 1.0 {
        1
    } else {
        damage as u32
    }
}

/// Critical hit chance in [0, 0.5]
pub fn critical_chance(combatant: &Combatant) -> f64 {
    let mut chance = BASE_CRITICAL_CHANCE + combatant.attributes.focus as f64 * CRITICAL_PER_FOCUS;

    if combatant.bond >= 80 {
        chance += CRITICAL_BOND_BONUS;
    }

    if combatant.fatigue >= 60 {
        chance *= 0.5;
    }

    chance.min(MAX_CRITICAL_CHANCE)
}

/// Roll for a critical hit
pub fn roll_critical(combatant: &Combatant, rng: &mut impl RandomSource) -> bool {
    let chance = critical_chance(combatant);
    let roll = rng.next_f64();
    tracing::trace!(combatant = %combatant.name, chance, roll, "critical roll");
    roll < chance
}
