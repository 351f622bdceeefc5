//! Opponent AI - Chooses one action per opponent turn
//!
//! Easy through hard roll against an [`AiProfile`] and pick abilities by
//! score. Master runs the deterministic [`plan_action`] planner.

mod flavor;
mod planner;
mod profile;
mod scoring;

pub use flavor::flavor_line;
pub use planner::{best_damage_per_energy, plan_action};
pub use profile::AiProfile;
pub use scoring::{best_scored_ability, score_ability, STATUS_BONUS, ULTIMATE_BONUS};

use crate::battle::{Action, BattleState};
use crate::rng::RandomSource;

/// Chance to defend when playing for survival
const SURVIVAL_DEFEND_CHANCE: f64 = 0.5;

/// Chance to wait when playing for survival with little energy
const SURVIVAL_WAIT_CHANCE: f64 = 0.3;

/// Chance to wait (rather than defend) when energy runs low
const LOW_ENERGY_WAIT_CHANCE: f64 = 0.6;

/// Decide the opponent's action for the current turn
///
/// Always returns an action; the opponent is never left without a move.
pub fn decide_action(state: &BattleState, profile: &AiProfile, rng: &mut impl RandomSource) -> Action {
    if profile.planner {
        let action = plan_action(state, profile);
        tracing::debug!(?action, "ai: planner decision");
        return action;
    }

    let action = weighted_action(state, profile, rng);
    tracing::debug!(?action, difficulty = %state.difficulty, "ai: weighted decision");
    action
}

fn weighted_action(state: &BattleState, profile: &AiProfile, rng: &mut impl RandomSource) -> Action {
    let me = &state.opponent;

    if let Some(threshold) = profile.low_health_threshold {
        if me.health_fraction() < threshold {
            if rng.chance(SURVIVAL_DEFEND_CHANCE) {
                return Action::Defend;
            }
            if me.energy < 40 && rng.chance(SURVIVAL_WAIT_CHANCE) {
                return Action::Wait;
            }
        }
    }

    if me.energy < 30 {
        return if rng.chance(LOW_ENERGY_WAIT_CHANCE) {
            Action::Wait
        } else {
            Action::Defend
        };
    }

    let roll = rng.next_f64();
    if roll < profile.defend_chance {
        return Action::Defend;
    }
    if roll < profile.defend_chance + profile.wait_chance {
        return Action::Wait;
    }

    match best_scored_ability(me, profile) {
        Some(index) => Action::UseAbility(index),
        None if profile.basic_attack_fallback => Action::Attack,
        None => Action::Wait,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Ability, AbilityTier, Combatant};
    use crate::rng::ScriptedRandom;
    use crate::types::{Attributes, Difficulty, Element, Rarity, StatKind};

    fn ability(name: &str, base: u32, cost: u32) -> Ability {
        Ability {
            name: name.to_string(),
            base_damage: base,
            primary_stat: StatKind::Power,
            stat_multiplier: 1.0,
            energy_cost: cost,
            hit_chance: 95.0,
            status_effects: Vec::new(),
            tier: AbilityTier::Normal,
        }
    }

    fn state(difficulty: Difficulty) -> BattleState {
        let attrs = Attributes::new(10, 10, 10, 10);
        let player = Combatant::new("P", Element::Fire, Rarity::Common, 1, attrs, Vec::new());
        let opponent = Combatant::new(
            "O",
            Element::Water,
            Rarity::Common,
            1,
            attrs,
            vec![ability("Splash", 10, 10), ability("Wave", 40, 30)],
        );
        BattleState::new(player, opponent, difficulty)
    }

    #[test]
    fn test_defend_and_wait_rolls() {
        let s = state(Difficulty::Easy);
        let profile = AiProfile::for_difficulty(Difficulty::Easy);
        assert_eq!(decide_action(&s, &profile, &mut ScriptedRandom::constant(0.1)), Action::Defend);
        assert_eq!(decide_action(&s, &profile, &mut ScriptedRandom::constant(0.3)), Action::Wait);
        // Wave: 40 + 10 - 15 = 35 beats Splash: 10 + 10 - 5 = 15
        assert_eq!(
            decide_action(&s, &profile, &mut ScriptedRandom::constant(0.9)),
            Action::UseAbility(1)
        );
    }

    #[test]
    fn test_low_energy_waits_or_defends() {
        let mut s = state(Difficulty::Normal);
        s.opponent.energy = 20;
        let profile = AiProfile::for_difficulty(Difficulty::Normal);
        assert_eq!(decide_action(&s, &profile, &mut ScriptedRandom::constant(0.5)), Action::Wait);
        assert_eq!(decide_action(&s, &profile, &mut ScriptedRandom::constant(0.7)), Action::Defend);
    }

    #[test]
    fn test_low_health_survival() {
        let mut s = state(Difficulty::Hard);
        s.opponent.health = s.opponent.max_health / 4;
        let profile = AiProfile::for_difficulty(Difficulty::Hard);
        assert_eq!(decide_action(&s, &profile, &mut ScriptedRandom::constant(0.2)), Action::Defend);

        s.opponent.energy = 35;
        let mut rng = ScriptedRandom::new(vec![0.6, 0.1]);
        assert_eq!(decide_action(&s, &profile, &mut rng), Action::Wait);
    }

    #[test]
    fn test_easy_ignores_low_health() {
        let mut s = state(Difficulty::Easy);
        s.opponent.health = 1;
        let profile = AiProfile::for_difficulty(Difficulty::Easy);
        assert_eq!(
            decide_action(&s, &profile, &mut ScriptedRandom::constant(0.9)),
            Action::UseAbility(1)
        );
    }

    #[test]
    fn test_fallback_when_nothing_affordable() {
        let mut s = state(Difficulty::Easy);
        s.opponent.abilities = vec![ability("Huge", 90, 80)];
        s.opponent.energy = 50;
        let profile = AiProfile::for_difficulty(Difficulty::Easy);
        let mut rng = ScriptedRandom::constant(0.9);
        assert_eq!(decide_action(&s, &profile, &mut rng), Action::Wait);
        let profile = profile.with_basic_attack_fallback(true);
        assert_eq!(decide_action(&s, &profile, &mut rng), Action::Attack);
    }

    #[test]
    fn test_master_is_deterministic() {
        let s = state(Difficulty::Master);
        let profile = AiProfile::for_difficulty(Difficulty::Master);
        let a = decide_action(&s, &profile, &mut ScriptedRandom::constant(0.0));
        let b = decide_action(&s, &profile, &mut ScriptedRandom::constant(0.99));
        assert_eq!(a, b);
    }
}
