//! One-sample Kolmogorov–Smirnov test
//!
//! The statistic is the largest vertical gap between the empirical CDF of the
//! sorted batch and the reference CDF, checked on both sides of each step.
//! The p-value comes from the asymptotic Kolmogorov distribution evaluated at
//! `sqrt(n) * D`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::special::{kolmogorov_sf, normal_cdf};
use super::{ensure_finite, HarnessConfig, StatsError};

/// Continuous distribution the batch is compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceDistribution {
    /// Continuous uniform on `[low, high)`
    Uniform { low: f64, high: f64 },

    /// Normal with the given mean and standard deviation
    Normal { mean: f64, std_dev: f64 },
}

impl Default for ReferenceDistribution {
    fn default() -> Self {
        ReferenceDistribution::Uniform {
            low: 0.0,
            high: 1.0,
        }
    }
}

impl ReferenceDistribution {
    /// Cumulative distribution function at `x`
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            ReferenceDistribution::Uniform { low, high } => {
                ((x - low) / (high - low)).clamp(0.0, 1.0)
            }
            ReferenceDistribution::Normal { mean, std_dev } => normal_cdf(x, mean, std_dev),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), StatsError> {
        match *self {
            ReferenceDistribution::Uniform { low, high } => {
                if low.is_finite() && high.is_finite() && low < high {
                    Ok(())
                } else {
                    Err(StatsError::InvalidParameter(format!(
                        "uniform reference needs finite low < high, got [{low}, {high})"
                    )))
                }
            }
            ReferenceDistribution::Normal { mean, std_dev } => {
                if mean.is_finite() && std_dev.is_finite() && std_dev > 0.0 {
                    Ok(())
                } else {
                    Err(StatsError::InvalidParameter(format!(
                        "normal reference needs finite mean and std_dev > 0, got ({mean}, {std_dev})"
                    )))
                }
            }
        }
    }
}

/// Outcome of one Kolmogorov–Smirnov test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KolmogorovSmirnovResult {
    /// `true` if the p-value exceeds the significance level
    pub consistent: bool,

    /// Maximum distance between empirical and reference CDF
    pub statistic: f64,

    pub p_value: f64,
}

/// KS test against uniform `[0, 1)` at the 5% level
///
/// # Example
/// ```
/// use prng_suite_core::stats::kolmogorov_smirnov_test;
///
/// let samples: Vec<f64> = (0..200).map(|i| (i as f64 + 0.5) / 200.0).collect();
/// let result = kolmogorov_smirnov_test(&samples).unwrap();
/// assert!((result.statistic - 0.0025).abs() < 1e-12);
/// assert!(result.consistent);
/// ```
pub fn kolmogorov_smirnov_test(samples: &[f64]) -> Result<KolmogorovSmirnovResult, StatsError> {
    kolmogorov_smirnov_test_with(samples, &HarnessConfig::default())
}

/// KS test against `config.reference` at `config.significance`
///
/// # Errors
/// - `InsufficientSamples` for an empty batch
/// - `NonFiniteSample` if any sample is NaN or infinite
pub fn kolmogorov_smirnov_test_with(
    samples: &[f64],
    config: &HarnessConfig,
) -> Result<KolmogorovSmirnovResult, StatsError> {
    config.validate()?;
    if samples.is_empty() {
        return Err(StatsError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }
    ensure_finite(samples)?;

    let statistic = ks_statistic(samples, &config.reference);
    let n = samples.len() as f64;
    let p_value = kolmogorov_sf(n.sqrt() * statistic);

    let result = KolmogorovSmirnovResult {
        consistent: p_value > config.significance,
        statistic,
        p_value,
    };
    debug!(
        samples = samples.len(),
        statistic,
        p_value,
        consistent = result.consistent,
        "kolmogorov-smirnov test"
    );
    Ok(result)
}

fn ks_statistic(samples: &[f64], reference: &ReferenceDistribution) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let cdf = reference.cdf(x);
            let above = (i + 1) as f64 / n - cdf;
            let below = cdf - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}
