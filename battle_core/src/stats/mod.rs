//! Stat resolver - Derived health and fatigue/death-mark penalties

mod readiness;

pub use readiness::{check_readiness, Readiness};

use crate::types::{Attributes, Rarity};
use serde::{Deserialize, Serialize};

/// Stat resolver constants
pub mod constants {
    /// Flat health every combatant starts with
    pub const BASE_HEALTH: f64 = 50.0;

    /// Health per point of vitality
    pub const HEALTH_PER_VITALITY: f64 = 5.0;

    /// Health per level
    pub const HEALTH_PER_LEVEL: f64 = 8.0;

    /// Upper bound for fatigue and bond
    pub const MAX_METER: u32 = 100;
}

/// Fatigue band, from fresh to severely exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueBand {
    /// Below 40
    Fresh,
    /// 40..60
    Light,
    /// 60..80
    Heavy,
    /// 80 and above
    Severe,
}

impl FatigueBand {
    pub fn from_fatigue(fatigue: u32) -> Self {
        match fatigue {
            f if f >= 80 => FatigueBand::Severe,
            f if f >= 60 => FatigueBand::Heavy,
            f if f >= 40 => FatigueBand::Light,
            _ => FatigueBand::Fresh,
        }
    }

    /// Multiplier applied to every base attribute in this band
    pub fn stat_multiplier(self) -> f64 {
        match self {
            FatigueBand::Fresh => 1.0,
            FatigueBand::Light => 0.9,
            FatigueBand::Heavy => 0.75,
            FatigueBand::Severe => 0.5,
        }
    }
}

/// Apply the banded fatigue penalty to a set of attributes
pub fn penalized_attributes(base: &Attributes, fatigue: u32) -> Attributes {
    let band = FatigueBand::from_fatigue(fatigue);
    if band == FatigueBand::Fresh {
        return *base;
    }
    base.scaled(band.stat_multiplier())
}

/// Halve every attribute of a death-marked creature
pub fn death_marked_attributes(base: &Attributes, death_mark: bool) -> Attributes {
    if death_mark {
        base.scaled(0.5)
    } else {
        *base
    }
}

/// Effective maximum health
///
/// `floor((50 + 5 * vitality + 8 * level) * rarity)`, where vitality is the
/// fatigue-penalized value. Never below 1.
pub fn effective_max_health(attributes: &Attributes, level: u32, rarity: Rarity, fatigue: u32) -> u32 {
    let vitality = penalized_attributes(attributes, fatigue).vitality as f64;
    let raw = constants::BASE_HEALTH
        + vitality * constants::HEALTH_PER_VITALITY
        + level as f64 * constants::HEALTH_PER_LEVEL;
    ((raw * rarity.health_multiplier()).floor() as u32).max(1)
}
