//! xorshift32 random number generator
//!
//! # Algorithm
//!
//! Marsaglia's 32-bit xorshift with the (13, 17, 5) triple:
//!
//! ```text
//! x ^= x << 13
//! x ^= x >> 17
//! x ^= x << 5
//! ```
//!
//! Bits shifted past the 32-bit register are discarded. The emitted value is
//! `x / 2^32`.
//!
//! # Zero seed
//!
//! Zero is a fixed point of all three steps, so a zero seed yields zeros
//! forever. This is kept as-is; callers that need a live stream must reject
//! zero seeds themselves (see [`crate::suite::resolve_seed`]).

use serde::{Deserialize, Serialize};

use super::{GeneratorError, PseudoRandom, WORD_SCALE};

/// Marsaglia xorshift32 generator
///
/// # Example
/// ```
/// use prng_suite_core::rng::{PseudoRandom, XorShift32};
///
/// let mut rng = XorShift32::new();
/// rng.seed(1);
/// rng.next_raw().unwrap();
/// assert_eq!(rng.state(), Some(270369));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XorShift32 {
    /// `None` until seeded
    state: Option<u32>,
}

impl XorShift32 {
    /// Create an unseeded generator
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Create a generator already seeded with `seed`
    ///
    /// A zero seed is accepted and produces an all-zero stream.
    pub fn with_seed(seed: u32) -> Self {
        Self { state: Some(seed) }
    }

    /// Current register value (for checkpointing)
    pub fn state(&self) -> Option<u32> {
        self.state
    }

    fn step(mut x: u32) -> u32 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        x
    }
}

impl PseudoRandom for XorShift32 {
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
