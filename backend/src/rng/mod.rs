//! Seedable pseudorandom number generators
//!
//! Every generator implements the [`PseudoRandom`] contract. Variants are
//! listed in a fixed registry ([`GeneratorKind`]) and dispatched statically
//! through the [`Generator`] enum.
//!
//! CRITICAL: None of these generators are suitable for cryptographic use.

mod lcg;
mod mt19937;
mod registry;
mod xorshift;

pub use lcg::LinearCongruential;
pub use mt19937::MersenneTwister;
pub use registry::{Generator, GeneratorKind, UnknownGenerator};
pub use xorshift::XorShift32;

use thiserror::Error;

/// 2^32 as a float, the divisor mapping a 32-bit word into [0.0, 1.0)
pub(crate) const WORD_SCALE: f64 = 4_294_967_296.0;

/// Errors raised by generator operations
///
/// Every operation checks its preconditions before touching generator state,
/// so a returned error means nothing was consumed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Generator has not been seeded")]
    Uninitialized,

    #[error("Cannot draw from an empty sequence")]
    EmptySequence,

    #[error("Invalid range: low {low}, high {high} (bounds must be ordered with a finite span)")]
    InvalidRange { low: f64, high: f64 },
}

/// Capability shared by every generator variant
///
/// Implementors supply seeding and a single-step draw; the range mappings,
/// selection and shuffling are derived from [`PseudoRandom::next_raw`].
///
/// # Example
/// ```
/// use prng_suite_core::rng::{LinearCongruential, PseudoRandom};
///
/// let mut rng = LinearCongruential::new();
/// rng.seed(12345);
///
/// let x = rng.uniform(0.0, 10.0).unwrap();
/// assert!((0.0..10.0).contains(&x));
///
/// let die = rng.randint(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
pub trait PseudoRandom {
    /// Initialize (or reset) the internal state from `value`
    ///
    /// Re-seeding restarts the deterministic sequence for that value.
    fn seed(&mut self, value: u32);

    /// Whether [`PseudoRandom::seed`] has been called
    fn is_seeded(&self) -> bool;

    /// Advance the state exactly once and return the emitted value in [0.0, 1.0)
    fn next_raw(&mut self) -> Result<f64, GeneratorError>;

    /// Endless stream of raw values in [0.0, 1.0)
    ///
    /// Fails with [`GeneratorError::Uninitialized`] before any stream exists
    /// if the generator was never seeded.
    ///
    /// # Example
    /// ```
    /// use prng_suite_core::rng::{PseudoRandom, XorShift32};
    ///
    /// let mut rng = XorShift32::new();
    /// assert!(rng.random().is_err());
    ///
    /// rng.seed(7);
    /// let batch: Vec<f64> = rng.random().unwrap().take(5).collect();
    /// assert_eq!(batch.len(), 5);
    /// ```
    fn random(&mut self) -> Result<RawStream<'_, Self>, GeneratorError>
    where
        Self: Sized,
    {
        if !self.is_seeded() {
            return Err(GeneratorError::Uninitialized);
        }
        Ok(RawStream { rng: self })
    }

    /// Float in [low, high)
    ///
    /// `low == high` yields `low`. Inverted bounds, NaN bounds and spans
    /// that overflow to infinity are rejected without consuming a draw.
    fn uniform(&mut self, low: f64, high: f64) -> Result<f64, GeneratorError> {
        if !self.is_seeded() {
            return Err(GeneratorError::Uninitialized);
        }
        if !(low <= high && (high - low).is_finite()) {
            return Err(GeneratorError::InvalidRange { low, high });
        }
        let raw = self.next_raw()?;
        let value = low + (high - low) * raw;
        // Rounding can land on `high` when the span is a few ulps wide
        if value >= high && low < high {
            return Ok(float_below(high));
        }
        Ok(value)
    }

    /// Integer in [low, high], both bounds inclusive
    fn randint(&mut self, low: i64, high: i64) -> Result<i64, GeneratorError> {
        if !self.is_seeded() {
            return Err(GeneratorError::Uninitialized);
        }
        if low > high {
            return Err(GeneratorError::InvalidRange {
                low: low as f64,
                high: high as f64,
            });
        }
        let raw = self.next_raw()?;
        let span = (high as i128 - low as i128 + 1) as f64;
        let offset = (span * raw).floor() as i128;
        // Rounding in `span * raw` can land exactly on `span` for wide ranges
        Ok((low as i128 + offset).min(high as i128) as i64)
    }

    /// Uniformly selected element of a non-empty slice
    fn choice<'a, T>(&mut self, seq: &'a [T]) -> Result<&'a T, GeneratorError>
    where
        Self: Sized,
    {
        if seq.is_empty() {
            return Err(GeneratorError::EmptySequence);
        }
        let index = self.randint(0, seq.len() as i64 - 1)?;
        Ok(&seq[index as usize])
    }

    /// In-place Fisher–Yates shuffle
    ///
    /// Walks `i` from the last index down to 1, swapping with `randint(0, i)`.
    fn shuffle<T>(&mut self, seq: &mut [T]) -> Result<(), GeneratorError>
    where
        Self: Sized,
    {
        if seq.is_empty() {
            return Err(GeneratorError::EmptySequence);
        }
        if !self.is_seeded() {
            return Err(GeneratorError::Uninitialized);
        }
        for i in (1..seq.len()).rev() {
            let j = self.randint(0, i as i64)?;
            seq.swap(i, j as usize);
        }
        Ok(())
    }
}

/// Largest finite float strictly below `x`
fn float_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Infinite iterator over a seeded generator's raw output
///
/// Created by [`PseudoRandom::random`]. Holds the generator mutably, so the
/// stream and the generator can never advance independently.
#[derive(Debug)]
pub struct RawStream<'a, G: PseudoRandom> {
    rng: &'a mut G,
}

impl<G: PseudoRandom> Iterator for RawStream<'_, G> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // Seeding is checked when the stream is created and cannot be undone
        self.rng.next_raw().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<G: PseudoRandom> std::iter::FusedIterator for RawStream<'_, G> {}
