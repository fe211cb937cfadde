//! Suite orchestration
//!
//! Drives every configured generator from a shared seed, collects a batch of
//! samples from each, and runs both goodness-of-fit tests on it.
//!
//! # Example
//!
//! ```
//! use prng_suite_core::suite::{run_suite, SuiteConfig};
//!
//! let config = SuiteConfig {
//!     seed: Some(2024),
//!     sample_count: 1_000,
//!     ..SuiteConfig::default()
//! };
//! let report = run_suite(&config).unwrap();
//! assert_eq!(report.seed, 2024);
//! assert_eq!(report.generators.len(), 3);
//! ```

mod output;
mod report;

pub use output::{write_report, write_samples, REPORT_JSON_FILE, REPORT_TEXT_FILE};
pub use report::render_text;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::rng::{Generator, GeneratorError, GeneratorKind, PseudoRandom};
use crate::stats::{
    chi_square_test_with, kolmogorov_smirnov_test_with, ChiSquareResult, HarnessConfig,
    KolmogorovSmirnovResult, StatsError,
};

/// Fallback seeds are drawn from the clock modulo this value
const CLOCK_SEED_MODULUS: u64 = 100_000;

/// Errors raised while running or persisting a suite
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Configuration for one suite run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Shared seed; `None` or zero picks one from the clock
    pub seed: Option<u32>,

    /// Samples drawn from each generator
    pub sample_count: usize,

    /// Leading samples kept in the report for each generator
    pub preview_len: usize,

    /// Directory for sample files and reports
    pub output_dir: PathBuf,

    /// Generators to exercise, in report order
    pub generators: Vec<GeneratorKind>,

    pub harness: HarnessConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sample_count: 10_000,
            preview_len: 100,
            output_dir: PathBuf::from("out"),
            generators: GeneratorKind::ALL.to_vec(),
            harness: HarnessConfig::default(),
        }
    }
}

impl SuiteConfig {
    pub fn validate(&self) -> Result<(), SuiteError> {
        if self.generators.is_empty() {
            return Err(SuiteError::InvalidConfig(
                "at least one generator is required".to_string(),
            ));
        }
        if self.sample_count == 0 {
            return Err(SuiteError::InvalidConfig(
                "sample_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Results for a single generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorReport {
    pub generator: GeneratorKind,
    pub name: String,
    pub chi_square: ChiSquareResult,
    pub kolmogorov_smirnov: KolmogorovSmirnovResult,
    /// First samples of the batch, for plotting
    pub preview: Vec<f64>,
}

/// Results of a whole suite run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub seed: u32,
    pub sample_count: usize,
    pub generators: Vec<GeneratorReport>,
}

impl SuiteReport {
    /// Whether every generator passed both tests
    pub fn all_consistent(&self) -> bool {
        self.generators
            .iter()
            .all(|g| g.chi_square.consistent && g.kolmogorov_smirnov.consistent)
    }
}

/// Pick a usable seed
///
/// A zero seed would stall xorshift forever, so zero and missing seeds are
/// replaced with the current Unix time modulo 100000. When the clock is
/// unreadable or the remainder is zero, [`FALLBACK_SEED`] is used instead.
pub fn resolve_seed(requested: Option<u32>) -> u32 {
    match requested {
        Some(seed) if seed != 0 => seed,
        other => {
            if other == Some(0) {
                warn!("zero seed would stall xorshift, choosing one from the clock");
            }
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .ok();
            seed_from_clock(secs)
        }
    }
}

/// Non-zero seed used when the clock gives nothing usable
pub const FALLBACK_SEED: u32 = 5489;

fn seed_from_clock(secs: Option<u64>) -> u32 {
    match secs.map(|secs| (secs % CLOCK_SEED_MODULUS) as u32) {
        Some(seed) if seed != 0 => seed,
        _ => {
            warn!(seed = FALLBACK_SEED, "clock gave no usable seed, using fallback");
            FALLBACK_SEED
        }
    }
}

/// Draw `amount` values from a freshly seeded generator of `kind`
pub fn generate(kind: GeneratorKind, seed: u32, amount: usize) -> Result<Vec<f64>, SuiteError> {
    let mut rng = Generator::new(kind);
    rng.seed(seed);
    let samples: Vec<f64> = rng.random()?.take(amount).collect();
    debug!(generator = %kind, seed, amount, "generated samples");
    Ok(samples)
}

/// Run both tests on one generator's batch
pub fn evaluate(
    kind: GeneratorKind,
    samples: &[f64],
    preview_len: usize,
    harness: &HarnessConfig,
) -> Result<GeneratorReport, SuiteError> {
    let chi_square = chi_square_test_with(samples, harness)?;
    let kolmogorov_smirnov = kolmogorov_smirnov_test_with(samples, harness)?;

    info!(
        generator = %kind,
        chi_square = chi_square.chi_square,
        chi_p_value = chi_square.p_value,
        ks_statistic = kolmogorov_smirnov.statistic,
        ks_p_value = kolmogorov_smirnov.p_value,
        consistent = chi_square.consistent && kolmogorov_smirnov.consistent,
        "generator evaluated"
    );

    Ok(GeneratorReport {
        generator: kind,
        name: kind.name().to_string(),
        chi_square,
        kolmogorov_smirnov,
        preview: samples.iter().take(preview_len).copied().collect(),
    })
}

/// Generate and evaluate every configured generator
///
/// Pure computation: nothing is written to disk. Pair with
/// [`run_suite_with_samples`] when the raw batches are also needed.
pub fn run_suite(config: &SuiteConfig) -> Result<SuiteReport, SuiteError> {
    run_suite_with_samples(config).map(|(report, _)| report)
}

/// Like [`run_suite`], also returning each generator's full batch
pub fn run_suite_with_samples(
    config: &SuiteConfig,
) -> Result<(SuiteReport, Vec<(GeneratorKind, Vec<f64>)>), SuiteError> {
    config.validate()?;
    let seed = resolve_seed(config.seed);
    info!(seed, sample_count = config.sample_count, "running suite");

    let mut reports = Vec::with_capacity(config.generators.len());
    let mut batches = Vec::with_capacity(config.generators.len());
    for &kind in &config.generators {
        let samples = generate(kind, seed, config.sample_count)?;
        reports.push(evaluate(kind, &samples, config.preview_len, &config.harness)?);
        batches.push((kind, samples));
    }

    let report = SuiteReport {
        seed,
        sample_count: config.sample_count,
        generators: reports,
    };
    Ok((report, batches))
}
