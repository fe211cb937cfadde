//! Registry of available generator variants
//!
//! The set of variants is fixed at compile time. [`GeneratorKind`] names a
//! variant (for configuration and reports) and [`Generator`] holds a live
//! instance with static dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GeneratorError, LinearCongruential, MersenneTwister, PseudoRandom, XorShift32};

/// Identifies a generator variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    LinearCongruential,
    XorShift,
    MersenneTwister,
}

impl GeneratorKind {
    /// Every registered variant, in report order
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::LinearCongruential,
        GeneratorKind::MersenneTwister,
        GeneratorKind::XorShift,
    ];

    /// Display name used in reports and sample file names
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::LinearCongruential => "LinearCongruentialGenerator",
            GeneratorKind::XorShift => "XORShift",
            GeneratorKind::MersenneTwister => "MersenneTwister",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unregistered generator name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown generator '{0}' (expected one of: lcg, xorshift, mt)")]
pub struct UnknownGenerator(pub String);

impl FromStr for GeneratorKind {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lcg" | "linearcongruential" | "linearcongruentialgenerator" => {
                Ok(GeneratorKind::LinearCongruential)
            }
            "xorshift" | "xorshift32" => Ok(GeneratorKind::XorShift),
            "mt" | "mt19937" | "mersennetwister" => Ok(GeneratorKind::MersenneTwister),
            _ => Err(UnknownGenerator(s.to_string())),
        }
    }
}

/// A live generator of any registered variant
///
/// # Example
/// ```
/// use prng_suite_core::rng::{Generator, GeneratorKind, PseudoRandom};
///
/// let mut rng = Generator::new(GeneratorKind::XorShift);
/// rng.seed(42);
/// let mut deck: Vec<u8> = (1..=52).collect();
/// rng.shuffle(&mut deck).unwrap();
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generator {
    LinearCongruential(LinearCongruential),
    XorShift(XorShift32),
    MersenneTwister(MersenneTwister),
}

impl Generator {
    /// Create an unseeded generator of the given variant
    pub fn new(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::LinearCongruential => {
                Generator::LinearCongruential(LinearCongruential::new())
            }
            GeneratorKind::XorShift => Generator::XorShift(XorShift32::new()),
            GeneratorKind::MersenneTwister => Generator::MersenneTwister(MersenneTwister::new()),
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::LinearCongruential(_) => GeneratorKind::LinearCongruential,
            Generator::XorShift(_) => GeneratorKind::XorShift,
            Generator::MersenneTwister(_) => GeneratorKind::MersenneTwister,
        }
    }
}

impl PseudoRandom for Generator {
    fn seed(&mut self, value: u32) {
        match self {
            Generator::LinearCongruential(rng) => rng.seed(value),
            Generator::XorShift(rng) => rng.seed(value),
            Generator::MersenneTwister(rng) => rng.seed(value),
        }
    }

    fn is_seeded(&self) -> bool {
        match self {
            Generator::LinearCongruential(rng) => rng.is_seeded(),
            Generator::XorShift(rng) => rng.is_seeded(),
            Generator::MersenneTwister(rng) => rng.is_seeded(),
        }
    }

    fn next_raw(&mut self) -> Result<f64, GeneratorError> {
        match self {
            Generator::LinearCongruential(rng) => rng.next_raw(),
            Generator::XorShift(rng) => rng.next_raw(),
            Generator::MersenneTwister(rng) => rng.next_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("lcg".parse::<GeneratorKind>(), Ok(GeneratorKind::LinearCongruential));
        assert_eq!("XORShift".parse::<GeneratorKind>(), Ok(GeneratorKind::XorShift));
        assert_eq!("MT19937".parse::<GeneratorKind>(), Ok(GeneratorKind::MersenneTwister));
        assert_eq!(
            "pcg".parse::<GeneratorKind>(),
            Err(UnknownGenerator("pcg".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip_through_parse() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.name().parse::<GeneratorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_new_reports_its_kind() {
        for kind in GeneratorKind::ALL {
            let rng = Generator::new(kind);
            assert_eq!(rng.kind(), kind);
            assert!(!rng.is_seeded());
        }
    }
}
