//! Battle actions and turn phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// One move a combatant can make on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum Action {
    /// Zero-cost basic attack, always available
    Attack,
    /// Use the ability at this index of the actor's ability list
    UseAbility(usize),
    Defend,
    Wait,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Attack => write!(f, "attack"),
            Action::UseAbility(index) => write!(f, "ability #{}", index),
            Action::Defend => write!(f, "defend"),
            Action::Wait => write!(f, "wait"),
        }
    }
}

/// Whose move the battle is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Round start; the player always moves first
    #[default]
    Player,
    Opponent,
    /// Both sides have moved; waiting for the turn boundary
    RoundEnd,
}
