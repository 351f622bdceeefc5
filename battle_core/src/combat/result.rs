//! ActionOutcome - Record of a single battle action, for the battle log

use crate::combatant::StatusEffect;
use crate::element::Effectiveness;
use serde::{Deserialize, Serialize};

/// What happened when an action was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The attack landed
    Hit,
    /// The defender evaded
    Missed,
    /// A low-bond creature ignored the command
    Hesitated,
    /// Not enough energy; nothing happened
    InsufficientEnergy,
    Defended,
    Waited,
    /// The action was not legal in the current state; nothing happened
    Rejected,
}

/// Outcome of one action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub kind: OutcomeKind,
    /// Name of the acting combatant
    pub actor: String,
    /// Ability name, or the action name for non-attacks
    pub action: String,
    pub success: bool,
    pub damage: u32,
    pub is_critical: bool,
    pub energy_spent: u32,
    pub energy_restored: u32,
    pub effectiveness: Option<Effectiveness>,
    /// Status effects attached by a landed ability
    pub effects_applied: Vec<StatusEffect>,
    /// Defender health after the action, for attacks
    pub target_health: Option<u32>,
    pub message: String,
}

impl ActionOutcome {
    fn empty(kind: OutcomeKind, actor: &str, action: &str, message: String) -> Self {
        ActionOutcome {
            kind,
            actor: actor.to_string(),
            action: action.to_string(),
            success: false,
            damage: 0,
            is_critical: false,
            energy_spent: 0,
            energy_restored: 0,
            effectiveness: None,
            effects_applied: Vec::new(),
            target_health: None,
            message,
        }
    }

    /// An action that was refused without touching the battle state
    pub fn rejected(actor: &str, action: &str, reason: impl Into<String>) -> Self {
        Self::empty(OutcomeKind::Rejected, actor, action, reason.into())
    }

    pub(crate) fn insufficient_energy(actor: &str, action: &str) -> Self {
        Self::empty(
            OutcomeKind::InsufficientEnergy,
            actor,
            action,
            format!("{} does not have enough energy!", actor),
        )
    }

    pub(crate) fn hesitated(actor: &str, action: &str, energy_spent: u32) -> Self {
        let mut outcome = Self::empty(
            OutcomeKind::Hesitated,
            actor,
            action,
            format!("{} hesitated and ignored the command!", actor),
        );
        outcome.energy_spent = energy_spent;
        outcome
    }

    pub(crate) fn missed(actor: &str, action: &str, defender: &str, energy_spent: u32, target_health: u32) -> Self {
        let mut outcome = Self::empty(
            OutcomeKind::Missed,
            actor,
            action,
            format!("{} dodged the attack!", defender),
        );
        outcome.energy_spent = energy_spent;
        outcome.target_health = Some(target_health);
        outcome
    }

    pub(crate) fn stance(kind: OutcomeKind, actor: &str, action: &str, energy_restored: u32, message: String) -> Self {
        let mut outcome = Self::empty(kind, actor, action, message);
        outcome.success = true;
        outcome.energy_restored = energy_restored;
        outcome
    }

    /// True when the action left the battle state untouched
    pub fn is_noop(&self) -> bool {
        matches!(self.kind, OutcomeKind::Rejected | OutcomeKind::InsufficientEnergy)
    }

    /// Short one-line summary for logs
    pub fn summary(&self) -> String {
        let mut parts = vec![self.message.clone()];

        if self.energy_spent > 0 {
            parts.push(format!("-{} energy", self.energy_spent));
        }

        if self.energy_restored > 0 {
            parts.push(format!("+{} energy", self.energy_restored));
        }

        if let Some(health) = self.target_health {
            parts.push(format!("target at {} HP", health));
        }

        parts.join(" | ")
    }
}
