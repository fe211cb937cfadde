//! Statistical validation of generator output
//!
//! Goodness-of-fit tests that decide whether a batch of samples is plausibly
//! uniform. The tests are pure functions over a borrowed slice: they hold no
//! state and never know which generator produced the samples.
//!
//! - **chi_square**: equal-width histogram vs. a flat expectation
//! - **kolmogorov_smirnov**: sup-distance between empirical and reference CDF
//! - **special**: gamma, chi-square and Kolmogorov distribution functions

pub mod chi_square;
pub mod kolmogorov_smirnov;
pub mod special;

pub use chi_square::{chi_square_test, chi_square_test_with, ChiSquareResult};
pub use kolmogorov_smirnov::{
    kolmogorov_smirnov_test, kolmogorov_smirnov_test_with, KolmogorovSmirnovResult,
    ReferenceDistribution,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the goodness-of-fit tests
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("Insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("Sample at index {index} is not a finite number")]
    NonFiniteSample { index: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Range the chi-square histogram is spread over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BinRange {
    /// From the smallest to the largest observed sample
    Observed,

    /// A fixed interval; samples outside it are not counted
    Fixed { low: f64, high: f64 },
}

/// Tunable parameters shared by both tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Significance level; the null hypothesis is rejected below it
    pub significance: f64,

    /// Histogram range for the chi-square test
    pub bin_range: BinRange,

    /// Distribution the Kolmogorov–Smirnov test compares against
    pub reference: ReferenceDistribution,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            significance: 0.05,
            bin_range: BinRange::Observed,
            reference: ReferenceDistribution::default(),
        }
    }
}

impl HarnessConfig {
    pub(crate) fn validate(&self) -> Result<(), StatsError> {
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(StatsError::InvalidParameter(format!(
                "significance must lie in (0, 1), got {}",
                self.significance
            )));
        }
        if let BinRange::Fixed { low, high } = self.bin_range {
            if !(low.is_finite() && high.is_finite() && low < high) {
                return Err(StatsError::InvalidParameter(format!(
                    "fixed bin range [{low}, {high}] is empty or not finite"
                )));
            }
        }
        self.reference.validate()
    }
}

pub(crate) fn ensure_finite(samples: &[f64]) -> Result<(), StatsError> {
    match samples.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(StatsError::NonFiniteSample { index }),
        None => Ok(()),
    }
}
