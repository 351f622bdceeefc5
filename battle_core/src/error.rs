//! Errors raised while building a battle from external records

use thiserror::Error;

/// A record handed in by the persistence layer could not become a combatant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error("{record} is missing required field '{field}'")]
    MissingField { record: String, field: &'static str },
    #[error("{record}: field '{field}' = {value} is outside {min}..={max}")]
    OutOfRange {
        record: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{record}: field '{field}' is not a finite number")]
    InvalidNumber { record: String, field: &'static str },
    #[error("{record} has an empty name")]
    EmptyName { record: String },
    #[error("{record} cannot fight: {reason}")]
    NotReady { record: String, reason: String },
}
