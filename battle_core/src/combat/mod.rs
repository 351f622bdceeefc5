//! Combat resolution - Damage, accuracy and the four battle actions

mod damage;
mod resolution;
mod result;

pub use damage::{compute_damage, critical_chance, roll_critical};
pub use resolution::{basic_attack, defend, resolve_ability_use, wait};
pub use result::{ActionOutcome, OutcomeKind};

/// Combat calculation constants
pub mod constants {
    /// Damage multiplier on a critical hit
    pub const CRITICAL_MULTIPLIER: f64 = 2.0;

    /// Base critical hit chance
    pub const BASE_CRITICAL_CHANCE: f64 = 0.05;

    /// Critical chance per point of focus
    pub const CRITICAL_PER_FOCUS: f64 = 0.003;

    /// Critical chance bonus at bond >= 80
    pub const CRITICAL_BOND_BONUS: f64 = 0.10;

    /// Hard cap on critical chance
    pub const MAX_CRITICAL_CHANCE: f64 = 0.5;

    /// Damage bonus per level
    pub const DAMAGE_PER_LEVEL: f64 = 2.0;

    /// Fraction of vitality (and of damage) that mitigation can remove
    pub const MITIGATION_RATIO: f64 = 0.5;

    /// Evasion per point of agility, in percent
    pub const EVASION_PER_AGILITY: f64 = 0.3;

    /// Maximum evasion, in percent
    pub const MAX_EVASION: f64 = 40.0;

    /// Bond below which a creature may ignore a command
    pub const HESITATION_BOND: u32 = 20;

    /// Chance to hesitate when bond is low
    pub const HESITATION_CHANCE: f64 = 0.05;

    /// Energy restored by Defend
    pub const DEFEND_ENERGY: u32 = 15;

    /// Energy restored by Wait
    pub const WAIT_ENERGY: u32 = 30;
}
