//! Survival mode - Endless waves of stronger opponents
//!
//! There is no recovery between waves: the player's avatar carries its health
//! and energy from one wave into the next. Every fifth wave is a boss wave.

use crate::battle::BattleState;
use crate::combatant::{AvatarRecord, Combatant};
use crate::error::BattleError;
use crate::rng::RandomSource;
use crate::types::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base xp of a wave, before wave number and boss scaling
pub const BASE_WAVE_XP: u32 = 20;

/// Base currency of a wave, before wave number and boss scaling
pub const BASE_WAVE_CURRENCY: u32 = 15;

/// Reward multiplier on boss waves
pub const BOSS_REWARD_MULTIPLIER: f64 = 1.5;

/// Highest fatigue an avatar may have when entering survival
pub const MAX_ENTRY_FATIGUE: u32 = 60;

/// Difficulty band of a wave, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveTier {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
    Legendary,
    Mythic,
}

impl fmt::Display for WaveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WaveTier::Beginner => "Beginner",
            WaveTier::Intermediate => "Intermediate",
            WaveTier::Advanced => "Advanced",
            WaveTier::Elite => "Elite",
            WaveTier::Legendary => "Legendary",
            WaveTier::Mythic => "Mythic",
        };
        f.write_str(name)
    }
}

/// Rewards for clearing one wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveRewards {
    pub xp: u32,
    pub currency: u32,
    pub material_drop_chance: f64,
    pub guaranteed_material: u32,
}

/// Accumulated rewards of a survival run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurvivalRewards {
    pub waves_cleared: u32,
    pub xp: u32,
    pub currency: u32,
    pub rare_material: u32,
    pub fatigue_delta: u32,
}

pub fn is_boss_wave(wave: u32) -> bool {
    wave > 0 && wave % 5 == 0
}

/// Opponent attribute multiplier for a wave
pub fn wave_multiplier(wave: u32) -> f64 {
    let w = wave as f64;
    match wave {
        0..=5 => 1.0 + w * 0.05,
        6..=10 => 1.25 + (w - 5.0) * 0.08,
        11..=15 => 1.65 + (w - 10.0) * 0.10,
        16..=20 => 2.15 + (w - 15.0) * 0.12,
        _ => 2.75 + (w - 20.0) * 0.15,
    }
}

/// Rewards for clearing `wave`
pub fn wave_rewards(wave: u32) -> WaveRewards {
    let boss = is_boss_wave(wave);
    let bonus = if boss { BOSS_REWARD_MULTIPLIER } else { 1.0 };
    let decade = (wave / 10) as f64;

    WaveRewards {
        xp: (BASE_WAVE_XP as f64 * wave as f64 * 0.8 * bonus).floor() as u32,
        currency: (BASE_WAVE_CURRENCY as f64 * wave as f64 * 0.6 * bonus).floor() as u32,
        material_drop_chance: if boss { 0.3 + decade * 0.1 } else { 0.05 + decade * 0.02 },
        guaranteed_material: if boss && wave >= 20 { 1 } else { 0 },
    }
}

/// Fatigue accumulated by clearing `wave`
pub fn wave_fatigue(wave: u32) -> u32 {
    match wave {
        0..=5 => 3 + wave,
        6..=10 => 8 + (wave - 5) * 2,
        11..=15 => 18 + (wave - 10) * 3,
        _ => (wave - 15).saturating_mul(4).saturating_add(33),
    }
}

pub fn wave_tier(wave: u32) -> WaveTier {
    match wave {
        0..=5 => WaveTier::Beginner,
        6..=10 => WaveTier::Intermediate,
        11..=15 => WaveTier::Advanced,
        16..=20 => WaveTier::Elite,
        21..=30 => WaveTier::Legendary,
        _ => WaveTier::Mythic,
    }
}

/// AI tier that drives the opponent of a wave
pub fn wave_difficulty(wave: u32) -> Difficulty {
    match wave {
        0..=5 => Difficulty::Easy,
        6..=10 => Difficulty::Normal,
        11..=20 => Difficulty::Hard,
        _ => Difficulty::Master,
    }
}

/// Whether an avatar may start a survival run
pub fn can_enter_survival(fatigue: u32, alive: bool) -> bool {
    alive && fatigue < MAX_ENTRY_FATIGUE
}

/// Sum the rewards of waves `1..=final_wave`, rolling each wave's drop once
pub fn total_rewards(final_wave: u32, rng: &mut impl RandomSource) -> SurvivalRewards {
    let mut total = SurvivalRewards {
        waves_cleared: final_wave,
        ..Default::default()
    };

    for wave in 1..=final_wave {
        let rewards = wave_rewards(wave);
        total.xp = total.xp.saturating_add(rewards.xp);
        total.currency = total.currency.saturating_add(rewards.currency);
        total.rare_material = total.rare_material.saturating_add(rewards.guaranteed_material);
        total.fatigue_delta = total.fatigue_delta.saturating_add(wave_fatigue(wave));

        if rng.chance(rewards.material_drop_chance) {
            total.rare_material = total.rare_material.saturating_add(1);
        }
    }

    tracing::debug!(final_wave, xp = total.xp, rare_material = total.rare_material, "survival totals");
    total
}

/// Carry health and energy from the previous wave into a fresh combatant
pub fn carry_over(player: &mut Combatant, previous: &Combatant) {
    player.health = previous.health.min(player.max_health);
    player.energy = previous.energy.min(player.max_energy);
}

/// Build the battle for `wave`
///
/// The opponent's attributes are scaled by [`wave_multiplier`] and its AI
/// tier follows [`wave_difficulty`]. `carried` is the player's combatant at
/// the end of the previous wave, if any; without it this is the run's entry
/// wave and the player must pass [`can_enter_survival`].
pub fn create_wave_battle(
    player: &AvatarRecord,
    opponent: &AvatarRecord,
    wave: u32,
    carried: Option<&Combatant>,
) -> Result<BattleState, BattleError> {
    if carried.is_none() {
        player.ensure_ready()?;
        if !can_enter_survival(player.fatigue_level(), player.alive) {
            return Err(player.not_ready("Avatar is too tired for a survival run"));
        }
    }

    let mut player = Combatant::from_record(player, 1.0)?;
    if let Some(previous) = carried {
        carry_over(&mut player, previous);
    }

    let opponent = Combatant::from_record(opponent, wave_multiplier(wave))?;
    let difficulty = wave_difficulty(wave);

    tracing::debug!(
        wave,
        tier = %wave_tier(wave),
        %difficulty,
        player_health = player.health,
        opponent_health = opponent.max_health,
        "wave battle created"
    );

    Ok(BattleState::new(player, opponent, difficulty))
}
