//! Chi-square goodness-of-fit test for uniformity
//!
//! The samples are counted into `n / 100` equal-width bins and compared with
//! the flat expectation `n / bins`:
//!
//! ```text
//! statistic = Σ (observed - expected)² / expected
//! ```
//!
//! The statistic is judged against the chi-square distribution with
//! `bins - 1` degrees of freedom.
//!
//! # Binning range
//!
//! By default the bins span the observed `[min, max]` of the batch rather
//! than the theoretical `[0, 1)`. Use [`BinRange::Fixed`] to pin the range.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::special::{chi2_quantile, chi2_sf};
use super::{ensure_finite, BinRange, HarnessConfig, StatsError};

/// Samples per histogram bin
pub const SAMPLES_PER_BIN: usize = 100;

/// Outcome of one chi-square test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareResult {
    /// `true` if uniformity is not rejected at the configured significance
    pub consistent: bool,

    /// Test statistic
    pub chi_square: f64,

    /// Acceptance threshold for the statistic
    pub critical_value: f64,

    /// Probability of a statistic at least this large under uniformity
    pub p_value: f64,

    /// Number of histogram bins used
    pub bins: usize,
}

/// Chi-square test with the default [`HarnessConfig`]
///
/// # Errors
/// - `InsufficientSamples` with fewer than 100 samples (no bins)
/// - `NonFiniteSample` if any sample is NaN or infinite
///
/// # Example
/// ```
/// use prng_suite_core::stats::chi_square_test;
///
/// let samples: Vec<f64> = (0..1000).map(|i| i as f64 / 1000.0).collect();
/// let result = chi_square_test(&samples).unwrap();
/// assert_eq!(result.bins, 10);
/// assert!(result.consistent);
/// ```
pub fn chi_square_test(samples: &[f64]) -> Result<ChiSquareResult, StatsError> {
    chi_square_test_with(samples, &HarnessConfig::default())
}

/// Chi-square test with explicit significance level and binning range
pub fn chi_square_test_with(
    samples: &[f64],
    config: &HarnessConfig,
) -> Result<ChiSquareResult, StatsError> {
    config.validate()?;
    let n = samples.len();
    let bins = n / SAMPLES_PER_BIN;
    if bins == 0 {
        return Err(StatsError::InsufficientSamples {
            required: SAMPLES_PER_BIN,
            actual: n,
        });
    }
    ensure_finite(samples)?;

    let (low, high) = histogram_range(samples, config.bin_range);
    let observed = histogram(samples, bins, low, high);
    let expected = n as f64 / bins as f64;

    let chi_square: f64 = observed
        .iter()
        .map(|&count| {
            let deviation = count as f64 - expected;
            deviation * deviation / expected
        })
        .sum();

    let dof = bins - 1;
    let (critical_value, p_value) = if dof == 0 {
        // A single bin always holds every sample: the statistic is exactly 0
        (0.0, 1.0)
    } else {
        (
            chi2_quantile(1.0 - config.significance, dof)?,
            chi2_sf(chi_square, dof),
        )
    };

    let result = ChiSquareResult {
        consistent: chi_square <= critical_value,
        chi_square,
        critical_value,
        p_value,
        bins,
    };
    debug!(
        samples = n,
        bins,
        chi_square,
        critical_value,
        p_value,
        consistent = result.consistent,
        "chi-square test"
    );
    Ok(result)
}

fn histogram_range(samples: &[f64], range: BinRange) -> (f64, f64) {
    match range {
        BinRange::Fixed { low, high } => (low, high),
        BinRange::Observed => {
            let (min, max) = samples
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                    (lo.min(x), hi.max(x))
                });
            if min == max {
                (min - 0.5, max + 0.5)
            } else {
                (min, max)
            }
        }
    }
}

/// Counts per equal-width bin over `[low, high]`
///
/// Bins are half-open except the last, which also takes `high`. Samples
/// outside the range are dropped.
fn histogram(samples: &[f64], bins: usize, low: f64, high: f64) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    let width = (high - low) / bins as f64;
    for &x in samples {
        if x < low || x > high {
            continue;
        }
        let index = ((x - low) / width) as usize;
        counts[index.min(bins - 1)] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_last_bin_is_closed() {
        let counts = histogram(&[0.0, 0.5, 1.0], 2, 0.0, 1.0);
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn test_histogram_drops_out_of_range() {
        let counts = histogram(&[-0.1, 0.2, 0.7, 1.3], 2, 0.0, 1.0);
        assert_eq!(counts, vec![1, 1]);
    }

    #[test]
    fn test_observed_range_widens_constant_batch() {
        assert_eq!(histogram_range(&[0.25; 5], BinRange::Observed), (-0.25, 0.75));
    }

    #[test]
    fn test_observed_range_tracks_min_and_max() {
        let range = histogram_range(&[0.4, 0.1, 0.9, 0.2], BinRange::Observed);
        assert_eq!(range, (0.1, 0.9));
    }

    #[test]
    fn test_perfectly_flat_batch_has_zero_statistic() {
        let samples: Vec<f64> = (0..500).map(|i| (i as f64 + 0.5) / 500.0).collect();
        let result = chi_square_test(&samples).unwrap();
        assert_eq!(result.bins, 5);
        assert!(result.chi_square.abs() < 1e-12);
        assert!(result.consistent);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clustered_batch_is_rejected() {
        // Everything in the lower tenth of [0, 1), binned over the fixed range
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64 / 1000.0) * 0.1).collect();
        let config = HarnessConfig {
            bin_range: BinRange::Fixed { low: 0.0, high: 1.0 },
            ..HarnessConfig::default()
        };
        let result = chi_square_test_with(&samples, &config).unwrap();
        assert!(!result.consistent);
        assert!(result.p_value < 1e-10);
    }
}
