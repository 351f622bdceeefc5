//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Attributes, Difficulty, Element, Rarity, Side, StatKind};
pub use crate::combatant::{Ability, AbilityTier, AvatarRecord, Buff, Combatant, EffectKind, StatusEffect};

// Battle flow
pub use crate::battle::{create_battle, Action, BattleState, BattleStatus, Outcome, RoundReport, TurnPhase};
pub use crate::combat::{ActionOutcome, OutcomeKind};

// AI
pub use crate::ai::{decide_action, AiProfile};

// Rewards
pub use crate::rewards::{compute_rewards, BonusTag, RewardRecord};

// Randomness
pub use crate::rng::{RandomSource, ScriptedRandom};

// Config
pub use crate::config::default_abilities;
