//! Linear congruential generator
//!
//! # Algorithm
//!
//! `state = (A * state + C) mod 2^32` with the Numerical Recipes constants
//! `A = 1664525` and `C = 1013904223`. The modulus is the width of the
//! register, so wrapping 32-bit arithmetic performs the reduction.
//!
//! Each draw advances the state first and then emits `state / 2^32`.
//! Every seed, including zero, is a valid starting point.

use serde::{Deserialize, Serialize};

use super::{GeneratorError, PseudoRandom, WORD_SCALE};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// Linear congruential generator over a 32-bit register
///
/// # Example
/// ```
/// use prng_suite_core::rng::{LinearCongruential, PseudoRandom};
///
/// let mut rng = LinearCongruential::new();
/// rng.seed(12345);
/// assert_eq!(rng.next_raw().unwrap(), 87628868.0 / 4294967296.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCongruential {
    /// `None` until seeded
    state: Option<u32>,
}

impl LinearCongruential {
    /// Create an unseeded generator
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Create a generator already seeded with `seed`
    pub fn with_seed(seed: u32) -> Self {
        Self { state: Some(seed) }
    }

    /// Current register value (for checkpointing)
    pub fn state(&self) -> Option<u32> {
        self.state
    }

    fn step(state: u32) -> u32 {
        state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
    }
}

impl PseudoRandom for LinearCongruential {
    fn seed(&mut self, value: u32) {
        self.state = Some(value);
    }

    fn is_seeded(&self) -> bool {
        self.state.is_some()
    }

    fn next_raw(&mut self) -> Result<f64, GeneratorError> {
        let state = self.state.ok_or(GeneratorError::Uninitialized)?;
        let next = Self::step(state);
        self.state = Some(next);
        Ok(next as f64 / WORD_SCALE)
    }
}
