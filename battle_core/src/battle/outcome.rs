//! Battle status and win/loss/draw evaluation

use serde::{Deserialize, Serialize};

/// State of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus {
    InProgress,
    PlayerVictory,
    OpponentVictory,
    Draw,
}

impl BattleStatus {
    pub fn is_terminal(self) -> bool {
        self != BattleStatus::InProgress
    }

    pub fn is_player_victory(self) -> bool {
        self == BattleStatus::PlayerVictory
    }
}

/// How a finished battle was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// One or both combatants fell
    KnockOut,
    /// Round cap reached; decided by remaining health fraction
    Points,
}

/// Result of [`check_outcome`](super::BattleState::check_outcome)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: BattleStatus,
    /// None while the battle is in progress
    pub decision: Option<Decision>,
}

impl Outcome {
    pub const IN_PROGRESS: Outcome = Outcome {
        status: BattleStatus::InProgress,
        decision: None,
    };

    pub(crate) fn knock_out(status: BattleStatus) -> Self {
        Outcome {
            status,
            decision: Some(Decision::KnockOut),
        }
    }

    pub(crate) fn points(status: BattleStatus) -> Self {
        Outcome {
            status,
            decision: Some(Decision::Points),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Player-facing reason text
    pub fn reason(&self) -> &'static str {
        match (self.status, self.decision) {
            (BattleStatus::InProgress, _) => "The battle continues!",
            (BattleStatus::Draw, Some(Decision::Points)) => "Technical draw!",
            (BattleStatus::Draw, _) => "Both combatants fell!",
            (BattleStatus::PlayerVictory, Some(Decision::Points)) => "Victory on points!",
            (BattleStatus::PlayerVictory, _) => "Victory!",
            (BattleStatus::OpponentVictory, Some(Decision::Points)) => "Defeat on points!",
            (BattleStatus::OpponentVictory, _) => "Your avatar was defeated!",
        }
    }
}
