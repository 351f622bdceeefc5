//! Buffs and debuffs - Timed effects attached to a combatant

use serde::{Deserialize, Serialize};

/// What a timed effect does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Scales up mitigation of incoming hits by `magnitude` percent
    ///
    /// Counted down by opposing actions rather than turn boundaries.
    Defense,
    /// Damage each turn boundary
    Burn,
    /// Damage each turn boundary
    Poison,
    /// Healing each turn boundary
    Regeneration,
}

impl EffectKind {
    /// Whether the effect lands on the target of the ability (vs the user)
    pub fn targets_opponent(self) -> bool {
        matches!(self, EffectKind::Burn | EffectKind::Poison)
    }

    pub fn is_debuff(self) -> bool {
        self.targets_opponent()
    }

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Defense => "Defense",
            EffectKind::Burn => "Burn",
            EffectKind::Poison => "Poison",
            EffectKind::Regeneration => "Regeneration",
        }
    }
}

/// A timed effect on a combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub kind: EffectKind,
    pub magnitude: f64,
    /// Countdowns left before the effect expires
    pub remaining_turns: u32,
}

impl Buff {
    pub fn new(kind: EffectKind, magnitude: f64, turns: u32) -> Self {
        Buff {
            kind,
            magnitude,
            remaining_turns: turns,
        }
    }

    /// Defensive stance granted by the Defend action, covering the next opposing action
    pub fn defense_stance() -> Self {
        Buff::new(EffectKind::Defense, 50.0, 1)
    }

    /// Count down once. Returns true while still active.
    pub fn tick(&mut self) -> bool {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.remaining_turns > 0
    }

    /// Refresh duration, keeping the stronger magnitude
    pub fn refresh(&mut self, turns: u32, magnitude: f64) {
        self.remaining_turns = self.remaining_turns.max(turns);
        if magnitude > self.magnitude {
            self.magnitude = magnitude;
        }
    }
}
