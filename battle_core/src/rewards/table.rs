//! Base reward table per difficulty tier

use crate::types::Difficulty;
use serde::{Deserialize, Serialize};

/// Base rewards for one difficulty tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRewards {
    pub xp: u32,
    pub currency: u32,
    /// Rare materials granted on every win
    pub rare_material: u32,
    /// Chance of one bonus rare material on a win
    pub material_drop_chance: f64,
    /// Fatigue gained on a win
    pub fatigue: u32,
}

impl TierRewards {
    pub const fn new(xp: u32, currency: u32, rare_material: u32, material_drop_chance: f64, fatigue: u32) -> Self {
        TierRewards {
            xp,
            currency,
            rare_material,
            material_drop_chance,
            fatigue,
        }
    }
}

/// Reward table covering all four tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardTable {
    pub easy: TierRewards,
    pub normal: TierRewards,
    pub hard: TierRewards,
    pub master: TierRewards,
}

impl RewardTable {
    pub fn tier(&self, difficulty: Difficulty) -> &TierRewards {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Master => &self.master,
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        RewardTable {
            easy: TierRewards::new(15, 10, 0, 0.02, 5),
            normal: TierRewards::new(30, 20, 0, 0.05, 12),
            hard: TierRewards::new(60, 40, 0, 0.10, 20),
            master: TierRewards::new(120, 80, 1, 0.25, 30),
        }
    }
}
