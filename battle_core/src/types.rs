//! Core types shared across the battle engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental alignment of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Lightning,
    Shadow,
    Light,
    /// Element name not recognised in an incoming record (always neutral)
    #[serde(other)]
    Unknown,
}

impl Element {
    /// The seven playable elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Water,
            Element::Earth,
            Element::Wind,
            Element::Lightning,
            Element::Shadow,
            Element::Light,
        ]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Wind => "Wind",
            Element::Lightning => "Lightning",
            Element::Shadow => "Shadow",
            Element::Light => "Light",
            Element::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::all()
            .iter()
            .copied()
            .find(|e| e.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown element '{}'", s))
    }
}

/// Rarity tier of an avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// Multiplier applied to derived maximum health
    pub fn health_multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.2,
            Rarity::Legendary => 1.5,
        }
    }
}

/// Difficulty tier of a training battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Master,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Normal,
            Difficulty::Hard,
            Difficulty::Master,
        ]
    }

    /// Scale applied to the opponent's four base attributes
    pub fn attribute_scale(self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
            Difficulty::Master => 1.5,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Master => "master",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "master" => Ok(Difficulty::Master),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// Which of the four base attributes an ability scales with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    #[default]
    Power,
    Agility,
    Vitality,
    Focus,
}

/// The four base attributes of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub power: u32,
    pub agility: u32,
    pub vitality: u32,
    pub focus: u32,
}

impl Attributes {
    pub fn new(power: u32, agility: u32, vitality: u32, focus: u32) -> Self {
        Attributes {
            power,
            agility,
            vitality,
            focus,
        }
    }

    /// Read the attribute an ability scales with
    pub fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Power => self.power,
            StatKind::Agility => self.agility,
            StatKind::Vitality => self.vitality,
            StatKind::Focus => self.focus,
        }
    }

    /// Multiply every attribute by `factor`, flooring the result
    pub fn scaled(&self, factor: f64) -> Attributes {
        let scale = |v: u32| (v as f64 * factor).floor().max(0.0) as u32;
        Attributes {
            power: scale(self.power),
            agility: scale(self.agility),
            vitality: scale(self.vitality),
            focus: scale(self.focus),
        }
    }
}

/// One side of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}
