//! Ability scoring for the weighted (non-planner) tiers

use super::profile::AiProfile;
use crate::combatant::{Ability, Combatant};

/// Bonus added to an affordable Ultimate
pub const ULTIMATE_BONUS: f64 = 50.0;

/// Bonus for carrying a status effect
pub const STATUS_BONUS: f64 = 20.0;

/// Score an ability for `user`, or None if it cannot be paid for
///
/// `base_damage + stat_multiplier * 10 + 20 (status) - cost * 0.5`, plus the
/// Ultimate bonus when the profile prioritizes them.
pub fn score_ability(ability: &Ability, user: &Combatant, profile: &AiProfile) -> Option<f64> {
    if !user.can_afford(ability) {
        return None;
    }

    let mut score = ability.base_damage as f64 + ability.stat_multiplier * 10.0;
    if ability.has_status_effects() {
        score += STATUS_BONUS;
    }
    score -= ability.energy_cost as f64 * 0.5;

    if ability.is_ultimate() && profile.prioritizes_ultimate {
        score += ULTIMATE_BONUS;
    }

    Some(score)
}

/// Index of the best-scoring ability, if any scores above -1
///
/// Ties keep the earliest ability.
pub fn best_scored_ability(user: &Combatant, profile: &AiProfile) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, ability) in user.abilities.iter().enumerate() {
        let Some(score) = score_ability(ability, user, profile) else {
            continue;
        };
        let threshold = best.map(|(_, s)| s).unwrap_or(-1.0);
        if score > threshold {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{AbilityTier, EffectKind, StatusEffect};
    use crate::types::{Attributes, Difficulty, Element, Rarity, StatKind};

    fn ability(name: &str, base: u32, mult: f64, cost: u32) -> Ability {
        Ability {
            name: name.to_string(),
            base_damage: base,
            primary_stat: StatKind::Power,
            stat_multiplier: mult,
            energy_cost: cost,
            hit_chance: 95.0,
            status_effects: Vec::new(),
            tier: AbilityTier::Normal,
        }
    }

    fn user(abilities: Vec<Ability>) -> Combatant {
        Combatant::new("ai", Element::Earth, Rarity::Common, 1, Attributes::new(10, 10, 10, 10), abilities)
    }

    #[test]
    fn test_score_formula() {
        let profile = AiProfile::for_difficulty(Difficulty::Normal);
        let mut a = ability("Quake", 40, 1.5, 30);
        // 40 + 15 - 15 = 40
        assert!((score_ability(&a, &user(vec![]), &profile).unwrap() - 40.0).abs() < 1e-9);

        a.status_effects.push(StatusEffect {
            kind: EffectKind::Poison,
            magnitude: 3.0,
            turns: 2,
        });
        assert!((score_ability(&a, &user(vec![]), &profile).unwrap() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_unaffordable_is_none() {
        let profile = AiProfile::default();
        let mut c = user(vec![]);
        c.energy = 10;
        assert!(score_ability(&ability("Big", 90, 2.0, 60), &c, &profile).is_none());
    }

    #[test]
    fn test_ultimate_bonus_depends_on_profile() {
        let mut ult = ability("Meteor", 20, 1.0, 40);
        ult.tier = AbilityTier::Ultimate;
        let c = user(vec![]);
        let normal = score_ability(&ult, &c, &AiProfile::for_difficulty(Difficulty::Normal)).unwrap();
        let easy = score_ability(&ult, &c, &AiProfile::for_difficulty(Difficulty::Easy)).unwrap();
        assert!((normal - easy - ULTIMATE_BONUS).abs() < 1e-9);
    }

    #[test]
    fn test_best_scored_prefers_first_on_tie() {
        let c = user(vec![ability("A", 30, 1.0, 20), ability("B", 30, 1.0, 20), ability("C", 10, 1.0, 20)]);
        assert_eq!(best_scored_ability(&c, &AiProfile::default()), Some(0));
    }

    #[test]
    fn test_best_scored_none_when_broke() {
        let mut c = user(vec![ability("A", 30, 1.0, 50)]);
        c.energy = 20;
        assert_eq!(best_scored_ability(&c, &AiProfile::default()), None);
    }
}
