//! battle_core - Turn-based creature battle engine
//!
//! This library provides:
//! - Elemental affinity and stat derivation for combatants
//! - Damage, accuracy and critical-hit resolution
//! - BattleState: the per-battle state machine and history log
//! - Opponent AI per difficulty tier, with a deterministic master planner
//! - Reward calculation for training battles and survival waves
//!
//! Every roll goes through an injected [`RandomSource`], so a battle is fully
//! reproducible from a seeded generator.

pub mod ai;
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod element;
pub mod error;
pub mod prelude;
pub mod rewards;
pub mod rng;
pub mod stats;
pub mod survival;
pub mod types;

// Re-export core types for convenience
pub use ai::{decide_action, flavor_line, AiProfile};
pub use battle::{create_battle, Action, BattleState, BattleStatus, Decision, Outcome, RoundReport, TurnPhase};
pub use combat::{compute_damage, critical_chance, resolve_ability_use, ActionOutcome, OutcomeKind};
pub use combatant::{Ability, AbilityRecord, AvatarRecord, Buff, Combatant, EffectKind};
pub use config::{default_abilities, ConfigError};
pub use element::affinity_multiplier;
pub use error::BattleError;
pub use rewards::{battle_fatigue, compute_rewards, BonusTag, RewardRecord, RewardTable};
pub use rng::{RandomSource, ScriptedRandom};
pub use stats::{check_readiness, effective_max_health, penalized_attributes, Readiness};
pub use types::{Attributes, Difficulty, Element, Rarity, Side, StatKind};
