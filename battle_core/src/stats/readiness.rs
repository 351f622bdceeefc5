//! Readiness - Whether an avatar may enter a training battle

use serde::{Deserialize, Serialize};

/// Result of a pre-battle readiness check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    /// May fight, but will suffer penalties
    Warned(String),
    Blocked(String),
}

impl Readiness {
    pub fn can_fight(&self) -> bool {
        !matches!(self, Readiness::Blocked(_))
    }
}

/// Check whether an avatar with this fatigue and life state may fight
pub fn check_readiness(fatigue: u32, alive: bool) -> Readiness {
    if !alive {
        return Readiness::Blocked("Avatar is dead and must be resurrected first".to_string());
    }
    if fatigue >= 100 {
        return Readiness::Blocked("Avatar has collapsed and needs rest".to_string());
    }
    if fatigue >= 80 {
        return Readiness::Blocked("Avatar is too exhausted to fight safely".to_string());
    }
    if fatigue >= 60 {
        return Readiness::Warned("Avatar is exhausted and will fight with penalties".to_string());
    }
    Readiness::Ready
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_is_blocked() {
        assert!(!check_readiness(0, false).can_fight());
    }

    #[test]
    fn test_fatigue_thresholds() {
        assert_eq!(check_readiness(0, true), Readiness::Ready);
        assert_eq!(check_readiness(59, true), Readiness::Ready);
        assert!(matches!(check_readiness(60, true), Readiness::Warned(_)));
        assert!(check_readiness(79, true).can_fight());
        assert!(!check_readiness(80, true).can_fight());
        assert!(!check_readiness(100, true).can_fight());
    }
}
