//! Injectable random source
//!
//! Every roll in the engine (hesitation, evasion, critical hits, AI choices,
//! material drops) goes through [`RandomSource`], so a battle is fully
//! replayable from a seeded generator.

use rand::RngCore;

/// Source of uniform floats in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial with probability `chance`
    fn chance(&mut self, chance: f64) -> bool {
        self.next_f64() < chance
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        rand::Rng::gen::<f64>(self)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted
///
/// Useful for pinning a specific branch in tests and for replaying a recorded
/// battle.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a scripted source. An empty script always yields `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        ScriptedRandom {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always returns the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999_999)
    }
}
