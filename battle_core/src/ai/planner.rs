//! Deterministic planner used by the master tier

use super::profile::AiProfile;
use crate::battle::{Action, BattleState};
use crate::combat::compute_damage;
use crate::combatant::Combatant;

/// Health fraction below which the planner stops attacking by default
const CRITICAL_HEALTH: f64 = 0.25;

/// Opponent health fraction that triggers an all-in while critical
const ALL_IN_THRESHOLD: f64 = 0.3;

/// Choose the opponent's move without randomness
///
/// 1. Finish the player if any affordable ability is lethal (no crit).
/// 2. Below 25% health: all-in if the player is below 30%, else defend
///    (wait when energy < 50).
/// 3. Fire an affordable Ultimate.
/// 4. Best damage per energy, falling back to wait/defend.
pub fn plan_action(state: &BattleState, profile: &AiProfile) -> Action {
    let me = &state.opponent;
    let foe = &state.player;

    for (index, ability) in me.affordable_abilities() {
        let simulated = compute_damage(me, ability, foe, false);
        if simulated >= foe.health {
            tracing::debug!(ability = %ability.name, simulated, "planner: lethal finish");
            return Action::UseAbility(index);
        }
    }

    if me.health_fraction() < CRITICAL_HEALTH {
        if foe.health_fraction() < ALL_IN_THRESHOLD {
            tracing::debug!("planner: all-in at critical health");
            return best_damage_per_energy(me, foe, profile);
        }
        if me.energy < 50 {
            return Action::Wait;
        }
        return Action::Defend;
    }

    if let Some((index, _)) = me.affordable_abilities().find(|(_, a)| a.is_ultimate()) {
        tracing::debug!(index, "planner: ultimate ready");
        return Action::UseAbility(index);
    }

    best_damage_per_energy(me, foe, profile)
}

/// Affordable ability with the highest simulated damage per energy point
///
/// Zero-cost abilities rank above everything. With nothing affordable the
/// planner waits below 40 energy and defends otherwise, unless the profile
/// opts into the basic attack.
pub fn best_damage_per_energy(me: &Combatant, foe: &Combatant, profile: &AiProfile) -> Action {
    let mut best: Option<(usize, f64)> = None;

    for (index, ability) in me.affordable_abilities() {
        let damage = compute_damage(me, ability, foe, false) as f64;
        let ratio = if ability.energy_cost == 0 {
            f64::INFINITY
        } else {
            damage / ability.energy_cost as f64
        };
        if ratio > best.map(|(_, r)| r).unwrap_or(0.0) {
            best = Some((index, ratio));
        }
    }

    match best {
        Some((index, _)) => Action::UseAbility(index),
        None if profile.basic_attack_fallback => Action::Attack,
        None if me.energy < 40 => Action::Wait,
        None => Action::Defend,
    }
}
