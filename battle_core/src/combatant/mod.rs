//! Combatant - A creature snapshot for the duration of one battle

mod ability;
mod buff;
mod record;

pub use ability::{Ability, AbilityTier, StatusEffect, DEFAULT_HIT_CHANCE};
pub use buff::{Buff, EffectKind};
pub use record::{AbilityRecord, AvatarRecord, MAX_ATTRIBUTE, MAX_LEVEL};

use crate::error::BattleError;
use crate::stats::{death_marked_attributes, effective_max_health};
use crate::types::{Attributes, Element, Rarity};
use serde::{Deserialize, Serialize};

/// Default energy cap
pub const MAX_ENERGY: u32 = 100;

/// Change caused by a continuous effect at a turn boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectTick {
    pub kind: EffectKind,
    /// Health removed (damage) or restored (regeneration)
    pub amount: u32,
}

/// A creature taking part in a battle
///
/// Built as a copy of an external avatar record; the engine never touches the
/// caller's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub element: Element,
    pub rarity: Rarity,
    pub level: u32,
    /// Effective attributes (death mark and difficulty already applied)
    pub attributes: Attributes,
    pub max_health: u32,
    pub health: u32,
    pub max_energy: u32,
    pub energy: u32,
    pub abilities: Vec<Ability>,
    pub buffs: Vec<Buff>,
    pub fatigue: u32,
    pub bond: u32,
    /// Set by a prior resurrection; read-only to the engine
    pub death_mark: bool,
}

impl Combatant {
    /// Build a combatant from an avatar record
    ///
    /// `attribute_scale` multiplies the four base attributes (difficulty
    /// scaling for opponents, 1.0 for the player) before health is derived.
    pub fn from_record(record: &AvatarRecord, attribute_scale: f64) -> Result<Self, BattleError> {
        let avatar = record.validate()?;

        let mut attributes = death_marked_attributes(&avatar.attributes, avatar.death_mark);
        if (attribute_scale - 1.0).abs() > f64::EPSILON {
            attributes = attributes.scaled(attribute_scale);
        }

        let max_health = effective_max_health(&attributes, avatar.level, avatar.rarity, avatar.fatigue);

        Ok(Combatant {
            name: avatar.name,
            element: avatar.element,
            rarity: avatar.rarity,
            level: avatar.level,
            attributes,
            max_health,
            health: max_health,
            max_energy: MAX_ENERGY,
            energy: MAX_ENERGY,
            abilities: avatar.abilities,
            buffs: Vec::new(),
            fatigue: avatar.fatigue,
            bond: avatar.bond,
            death_mark: avatar.death_mark,
        })
    }

    /// Build a combatant directly from validated parts, at full health and energy
    pub fn new(
        name: impl Into<String>,
        element: Element,
        rarity: Rarity,
        level: u32,
        attributes: Attributes,
        abilities: Vec<Ability>,
    ) -> Self {
        let max_health = effective_max_health(&attributes, level, rarity, 0);
        Combatant {
            name: name.into(),
            element,
            rarity,
            level,
            attributes,
            max_health,
            health: max_health,
            max_energy: MAX_ENERGY,
            energy: MAX_ENERGY,
            abilities,
            buffs: Vec::new(),
            fatigue: 0,
            bond: 0,
            death_mark: false,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Current health as a fraction of maximum
    pub fn health_fraction(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f64 / self.max_health as f64
    }

    pub fn can_afford(&self, ability: &Ability) -> bool {
        self.energy >= ability.energy_cost
    }

    /// Indices of abilities the combatant can currently pay for
    pub fn affordable_abilities(&self) -> impl Iterator<Item = (usize, &Ability)> + '_ {
        self.abilities
            .iter()
            .enumerate()
            .filter(move |(_, ability)| self.can_afford(ability))
    }

    /// Remove energy, never going below zero. Returns the amount spent.
    pub fn spend_energy(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.energy);
        self.energy -= spent;
        spent
    }

    /// Add energy up to the cap. Returns the amount actually restored.
    pub fn restore_energy(&mut self, amount: u32) -> u32 {
        let before = self.energy;
        self.energy = self.energy.saturating_add(amount).min(self.max_energy);
        self.energy - before
    }

    /// Remove health, flooring at zero. Returns the amount removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    /// Restore health up to the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    /// The active buff of a given kind, if any
    pub fn active_buff(&self, kind: EffectKind) -> Option<&Buff> {
        self.buffs.iter().find(|b| b.kind == kind && b.is_active())
    }

    /// Attach a buff, refreshing an existing one of the same kind
    pub fn add_buff(&mut self, buff: Buff) {
        if let Some(existing) = self.buffs.iter_mut().find(|b| b.kind == buff.kind) {
            existing.refresh(buff.remaining_turns, buff.magnitude);
        } else {
            self.buffs.push(buff);
        }
    }

    /// Remove a buff of the given kind (e.g. a defense stance that absorbed a hit)
    pub fn consume_buff(&mut self, kind: EffectKind) -> Option<Buff> {
        let index = self.buffs.iter().position(|b| b.kind == kind)?;
        Some(self.buffs.remove(index))
    }

    /// Count down defensive stances after the other side has acted
    ///
    /// A stance with `remaining_turns = N` covers the next N opposing actions,
    /// unless a hit consumes it first.
    pub fn count_down_stance(&mut self) {
        self.buffs.retain_mut(|b| b.kind != EffectKind::Defense || b.tick());
    }

    /// Apply continuous effects, then count down and prune expired buffs
    ///
    /// An effect with `remaining_turns = N` applies at exactly N boundaries.
    /// Defensive stances are left to [`Combatant::count_down_stance`].
    pub fn tick_effects(&mut self) -> Vec<EffectTick> {
        let mut ticks = Vec::new();

        let continuous: Vec<(EffectKind, f64)> = self
            .buffs
            .iter()
            .filter(|b| b.is_active())
            .map(|b| (b.kind, b.magnitude))
            .collect();

        for (kind, magnitude) in continuous {
            let amount = magnitude.floor().max(0.0) as u32;
            let applied = match kind {
                EffectKind::Burn | EffectKind::Poison => self.take_damage(amount),
                EffectKind::Regeneration => self.heal(amount),
                EffectKind::Defense => continue,
            };
            tracing::trace!(combatant = %self.name, effect = kind.name(), applied, "effect tick");
            ticks.push(EffectTick { kind, amount: applied });
        }

        self.buffs.retain_mut(|b| b.kind == EffectKind::Defense || b.tick());
        ticks
    }
}
