//! Behavior profiles per difficulty tier

use crate::types::Difficulty;
use serde::{Deserialize, Serialize};

/// How an opponent plays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiProfile {
    /// Chance to defend on a regular turn
    pub defend_chance: f64,
    /// Chance to wait on a regular turn (rolled after defend)
    pub wait_chance: f64,
    /// Adds a bonus to Ultimate abilities when scoring
    pub prioritizes_ultimate: bool,
    /// Health fraction below which the opponent plays for survival
    pub low_health_threshold: Option<f64>,
    /// Use the deterministic planner instead of weighted rolls
    pub planner: bool,
    /// Use the zero-cost basic attack when no ability is affordable,
    /// instead of waiting or defending
    #[serde(default)]
    pub basic_attack_fallback: bool,
}

impl AiProfile {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => AiProfile {
                defend_chance: 0.2,
                wait_chance: 0.2,
                prioritizes_ultimate: false,
                low_health_threshold: None,
                planner: false,
                basic_attack_fallback: false,
            },
            Difficulty::Normal => AiProfile {
                defend_chance: 0.2,
                wait_chance: 0.1,
                prioritizes_ultimate: true,
                low_health_threshold: Some(0.3),
                planner: false,
                basic_attack_fallback: false,
            },
            Difficulty::Hard => AiProfile {
                defend_chance: 0.15,
                wait_chance: 0.1,
                prioritizes_ultimate: true,
                low_health_threshold: Some(0.4),
                planner: false,
                basic_attack_fallback: false,
            },
            Difficulty::Master => AiProfile {
                defend_chance: 0.15,
                wait_chance: 0.05,
                prioritizes_ultimate: true,
                low_health_threshold: Some(0.5),
                planner: true,
                basic_attack_fallback: false,
            },
        }
    }

    /// Same profile, with the basic-attack fallback switched on or off
    pub fn with_basic_attack_fallback(mut self, enabled: bool) -> Self {
        self.basic_attack_fallback = enabled;
        self
    }
}

impl Default for AiProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_master_plans() {
        for &d in Difficulty::all() {
            let profile = AiProfile::for_difficulty(d);
            assert_eq!(profile.planner, d == Difficulty::Master);
            assert!(!profile.basic_attack_fallback);
            assert!(profile.defend_chance + profile.wait_chance < 1.0);
        }
    }

    #[test]
    fn test_easy_ignores_ultimates_and_health() {
        let easy = AiProfile::for_difficulty(Difficulty::Easy);
        assert!(!easy.prioritizes_ultimate);
        assert!(easy.low_health_threshold.is_none());
    }
}
