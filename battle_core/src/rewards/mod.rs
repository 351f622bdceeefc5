//! Reward calculation for finished training battles

mod record;
mod table;

pub use record::{BonusTag, RewardRecord};
pub use table::{RewardTable, TierRewards};

use crate::battle::{BattleState, BattleStatus};
use crate::config::default_reward_table;
use crate::rng::RandomSource;
use crate::types::Difficulty;

/// Reward formula constants
pub mod constants {
    /// Share of base xp kept on a loss or draw
    pub const LOSS_XP_RATIO: f64 = 0.2;

    /// Share of base currency kept on a loss or draw
    pub const LOSS_CURRENCY_RATIO: f64 = 0.1;

    /// Share of base fatigue gained on a loss or draw
    pub const LOSS_FATIGUE_RATIO: f64 = 0.5;

    /// Wins at or below this round earn the fast-clear bonus
    pub const FAST_CLEAR_ROUNDS: u32 = 5;

    pub const FAST_CLEAR_BONUS: f64 = 0.25;

    /// Health fraction for the strong-finish bonus
    pub const STRONG_FINISH_HEALTH: f64 = 0.8;

    pub const STRONG_FINISH_BONUS: f64 = 0.5;

    /// Bond needed for the bond bonus
    pub const BOND_BONUS_THRESHOLD: u32 = 80;

    /// Extra xp from bond, as a share of xp earned so far
    pub const BOND_XP_BONUS: f64 = 0.2;

    /// Rounds after which a battle counts as long
    pub const LONG_BATTLE_ROUNDS: u32 = 10;

    /// Extra fatigue per round beyond a long battle
    pub const FATIGUE_PER_EXTRA_ROUND: u32 = 2;

    /// Fatigue multiplier when the player did not win
    pub const NON_WIN_FATIGUE_RATIO: f64 = 0.6;
}

use constants::*;

fn portion(value: u32, ratio: f64) -> u32 {
    (value as f64 * ratio).floor() as u32
}

/// Compute rewards with the reward table shipped in `config/rewards.toml`
pub fn compute_rewards(state: &BattleState, status: BattleStatus, rng: &mut impl RandomSource) -> RewardRecord {
    compute_rewards_with_table(&default_reward_table(), state, status, rng)
}

/// Compute the rewards for a finished battle
///
/// Anything other than a player victory (draws included) pays the loss
/// rates. On a win, bonuses stack in this order: fast clear, then either
/// flawless (full health) or strong finish (>= 80% health), then bond, then a
/// single drop roll for a bonus rare material.
pub fn compute_rewards_with_table(
    table: &RewardTable,
    state: &BattleState,
    status: BattleStatus,
    rng: &mut impl RandomSource,
) -> RewardRecord {
    let base = table.tier(state.difficulty);

    if !status.is_player_victory() {
        let record = RewardRecord {
            victory: false,
            xp: portion(base.xp, LOSS_XP_RATIO),
            currency: portion(base.currency, LOSS_CURRENCY_RATIO),
            rare_material: 0,
            fatigue_delta: portion(base.fatigue, LOSS_FATIGUE_RATIO),
            bonus_tags: Vec::new(),
        };
        tracing::debug!(?status, xp = record.xp, "rewards for a non-win");
        return record;
    }

    let mut record = RewardRecord {
        victory: true,
        xp: base.xp,
        currency: base.currency,
        rare_material: base.rare_material,
        fatigue_delta: base.fatigue,
        bonus_tags: Vec::new(),
    };

    if state.round <= FAST_CLEAR_ROUNDS {
        record.xp += portion(base.xp, FAST_CLEAR_BONUS);
        record.currency += portion(base.currency, FAST_CLEAR_BONUS);
        record.bonus_tags.push(BonusTag::FastClear);
    }

    let player = &state.player;
    if player.health == player.max_health {
        record.xp += base.xp;
        record.currency += base.currency;
        record.rare_material += 1;
        record.bonus_tags.push(BonusTag::Flawless);
    } else if player.health_fraction() >= STRONG_FINISH_HEALTH {
        record.xp += portion(base.xp, STRONG_FINISH_BONUS);
        record.currency += portion(base.currency, STRONG_FINISH_BONUS);
        record.bonus_tags.push(BonusTag::StrongFinish);
    }

    if player.bond >= BOND_BONUS_THRESHOLD {
        record.xp += portion(record.xp, BOND_XP_BONUS);
        record.bonus_tags.push(BonusTag::BondBonus);
    }

    if rng.chance(base.material_drop_chance) {
        record.rare_material += 1;
        record.bonus_tags.push(BonusTag::BonusMaterial);
    }

    if state.difficulty == Difficulty::Master {
        record.bonus_tags.push(BonusTag::LegendaryOpponent);
    }

    tracing::debug!(
        xp = record.xp,
        currency = record.currency,
        rare_material = record.rare_material,
        tags = ?record.bonus_tags,
        "rewards for a win"
    );
    record
}

/// Fatigue gained from a battle with the default table
pub fn battle_fatigue(state: &BattleState, status: BattleStatus) -> u32 {
    battle_fatigue_with_table(&default_reward_table(), state, status)
}

/// Fatigue gained from a battle, accounting for its length
///
/// Base tier fatigue plus 2 per round beyond 10, reduced to 60% (floored)
/// when the player did not win.
pub fn battle_fatigue_with_table(table: &RewardTable, state: &BattleState, status: BattleStatus) -> u32 {
    let mut fatigue = table.tier(state.difficulty).fatigue;

    if state.round > LONG_BATTLE_ROUNDS {
        fatigue += (state.round - LONG_BATTLE_ROUNDS) * FATIGUE_PER_EXTRA_ROUND;
    }

    if !status.is_player_victory() {
        fatigue = portion(fatigue, NON_WIN_FATIGUE_RATIO);
    }

    fatigue
}
