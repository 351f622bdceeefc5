//! Battle state machine
//!
//! A [`BattleState`] owns both combatants for one battle and advances only
//! through its transition methods:
//!
//! ```text
//! apply_player_action -> apply_opponent_action -> advance_turn -> ...
//! ```
//!
//! [`BattleState::play_round`] runs one full round, checking for a winner
//! after every step.

mod action;
mod outcome;
mod state;

pub use action::{Action, TurnPhase};
pub use outcome::{BattleStatus, Decision, Outcome};
pub use state::{create_battle, BattleState, HistoryEntry, OpponentTurn, RoundReport, TurnReport};

/// Battle pacing constants
pub mod constants {
    /// Energy both combatants regain at each turn boundary
    pub const ENERGY_PER_TURN: u32 = 20;

    /// Last round of a battle
    ///
    /// Once the player has acted in this round, a battle still standing is
    /// decided on points; the opponent does not act.
    pub const MAX_ROUNDS: u32 = 20;
}
