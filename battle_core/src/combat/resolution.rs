//! Action resolution - Apply an ability, defend or wait to two combatants

use super::constants::*;
use super::damage::{compute_damage, roll_critical};
use super::result::{ActionOutcome, OutcomeKind};
use crate::combatant::{Ability, Buff, Combatant, EffectKind};
use crate::element::{affinity_multiplier, Effectiveness};
use crate::rng::RandomSource;

/// Use `ability` from `attacker` on `defender`
///
/// 1. Insufficient energy: nothing happens.
/// 2. Bond below 20: 5% chance to hesitate, spending half the cost.
/// 3. Evasion: hit chance minus min(agility * 0.3, 40); a miss spends the
///    full cost.
/// 4. Otherwise roll critical, apply damage (health floors at 0), consume
///    the defender's defense stance and attach status effects.
pub fn resolve_ability_use(
    attacker: &mut Combatant,
    ability: &Ability,
    defender: &mut Combatant,
    rng: &mut impl RandomSource,
) -> ActionOutcome {
    if !attacker.can_afford(ability) {
        return ActionOutcome::insufficient_energy(&attacker.name, &ability.name);
    }

    if attacker.bond < HESITATION_BOND && rng.chance(HESITATION_CHANCE) {
        let spent = attacker.spend_energy(ability.energy_cost / 2);
        tracing::debug!(attacker = %attacker.name, ability = %ability.name, "hesitated");
        return ActionOutcome::hesitated(&attacker.name, &ability.name, spent);
    }

    let evasion = (defender.attributes.agility as f64 * EVASION_PER_AGILITY).min(MAX_EVASION);
    let roll = rng.next_f64() * 100.0;
    tracing::trace!(roll, hit_chance = ability.hit_chance, evasion, "accuracy roll");
    if roll > ability.hit_chance - evasion {
        let spent = attacker.spend_energy(ability.energy_cost);
        return ActionOutcome::missed(&attacker.name, &ability.name, &defender.name, spent, defender.health);
    }

    let is_critical = roll_critical(attacker, rng);
    let damage = compute_damage(attacker, ability, defender, is_critical);
    let spent = attacker.spend_energy(ability.energy_cost);
    defender.take_damage(damage);
    defender.consume_buff(EffectKind::Defense);

    for effect in &ability.status_effects {
        let buff = Buff::new(effect.kind, effect.magnitude, effect.turns);
        if effect.kind.targets_opponent() {
            defender.add_buff(buff);
        } else {
            attacker.add_buff(buff);
        }
    }

    let effectiveness = Effectiveness::from_multiplier(affinity_multiplier(attacker.element, defender.element));
    let message = format!(
        "{} used {}! Dealt {} damage{}{}",
        attacker.name,
        ability.name,
        damage,
        if is_critical { " (critical!)" } else { "" },
        effectiveness.annotation()
    );

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        ability = %ability.name,
        damage,
        is_critical,
        defender_health = defender.health,
        "ability landed"
    );

    ActionOutcome {
        kind: OutcomeKind::Hit,
        actor: attacker.name.clone(),
        action: ability.name.clone(),
        success: true,
        damage,
        is_critical,
        energy_spent: spent,
        energy_restored: 0,
        effectiveness: Some(effectiveness),
        effects_applied: ability.status_effects.clone(),
        target_health: Some(defender.health),
        message,
    }
}

/// Zero-cost fallback attack, always available
pub fn basic_attack(attacker: &mut Combatant, defender: &mut Combatant, rng: &mut impl RandomSource) -> ActionOutcome {
    resolve_ability_use(attacker, &Ability::basic_attack(), defender, rng)
}

/// Take a defensive stance: restore 15 energy and raise mitigation on the next hit
pub fn defend(combatant: &mut Combatant) -> ActionOutcome {
    let restored = combatant.restore_energy(DEFEND_ENERGY);
    combatant.add_buff(Buff::defense_stance());
    ActionOutcome::stance(
        OutcomeKind::Defended,
        &combatant.name,
        "Defend",
        restored,
        format!("{} took a defensive stance!", combatant.name),
    )
}

/// Gather energy: restore 30 energy
pub fn wait(combatant: &mut Combatant) -> ActionOutcome {
    let restored = combatant.restore_energy(WAIT_ENERGY);
    ActionOutcome::stance(
        OutcomeKind::Waited,
        &combatant.name,
        "Wait",
        restored,
        format!("{} gathered its energy!", combatant.name),
    )
}
