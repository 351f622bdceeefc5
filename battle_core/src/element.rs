//! Elemental affinity - type advantage multipliers
//!
//! Five elements form a cycle where each beats the next:
//! Fire -> Wind -> Earth -> Lightning -> Water -> Fire.
//! Shadow and Light sit outside the cycle and are each strong against the
//! other. Anything else is neutral.

use crate::types::Element;

/// Multiplier for an attack that has the advantage
pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;

/// Multiplier for an attack that is at a disadvantage
pub const DISADVANTAGE_MULTIPLIER: f64 = 0.75;

/// Multiplier for neutral matchups
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// How effective an attack is, for battle log narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    SuperEffective,
    Neutral,
    Weak,
}

impl Effectiveness {
    /// Classify a multiplier (>= 1.5 super effective, <= 0.75 weak)
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier >= ADVANTAGE_MULTIPLIER {
            Effectiveness::SuperEffective
        } else if multiplier <= DISADVANTAGE_MULTIPLIER {
            Effectiveness::Weak
        } else {
            Effectiveness::Neutral
        }
    }

    /// Annotation appended to battle messages
    pub fn annotation(self) -> &'static str {
        match self {
            Effectiveness::SuperEffective => " (super effective!)",
            Effectiveness::Neutral => "",
            Effectiveness::Weak => " (weak...)",
        }
    }
}

/// The element that `element` beats, if it belongs to the cycle
fn beats(element: Element) -> Option<Element> {
    match element {
        Element::Fire => Some(Element::Wind),
        Element::Wind => Some(Element::Earth),
        Element::Earth => Some(Element::Lightning),
        Element::Lightning => Some(Element::Water),
        Element::Water => Some(Element::Fire),
        Element::Shadow | Element::Light | Element::Unknown => None,
    }
}

/// Damage multiplier for `attacker` hitting `defender`
pub fn affinity_multiplier(attacker: Element, defender: Element) -> f64 {
    if attacker == defender || attacker == Element::Unknown || defender == Element::Unknown {
        return NEUTRAL_MULTIPLIER;
    }

    match (attacker, defender) {
        (Element::Shadow, Element::Light) | (Element::Light, Element::Shadow) => {
            return ADVANTAGE_MULTIPLIER;
        }
        _ => {}
    }

    if beats(attacker) == Some(defender) {
        ADVANTAGE_MULTIPLIER
    } else if beats(defender) == Some(attacker) {
        DISADVANTAGE_MULTIPLIER
    } else {
        NEUTRAL_MULTIPLIER
    }
}
