//! Calibration of the harness over repeated trials
//!
//! A good uniform source should pass each test about 95% of the time at the
//! 5% level. Single runs are allowed to fail; the pass rate over many
//! independent batches is what is checked.

use prng_suite_core::rng::{GeneratorKind, MersenneTwister, PseudoRandom};
use prng_suite_core::stats::{chi_square_test, kolmogorov_smirnov_test};
use prng_suite_core::suite::generate;

const TRIALS: u32 = 200;
const SAMPLES: usize = 10_000;

#[test]
fn test_pass_rate_on_uniform_source() {
    let mut chi_passes = 0;
    let mut ks_passes = 0;

    for trial in 0..TRIALS {
        let mut rng = MersenneTwister::with_seed(1_000 + trial);
        let batch: Vec<f64> = rng.random().unwrap().take(SAMPLES).collect();

        if chi_square_test(&batch).unwrap().consistent {
            chi_passes += 1;
        }
        if kolmogorov_smirnov_test(&batch).unwrap().consistent {
            ks_passes += 1;
        }
    }

    let chi_rate = chi_passes as f64 / TRIALS as f64;
    let ks_rate = ks_passes as f64 / TRIALS as f64;
    assert!(chi_rate > 0.88, "chi-square pass rate {chi_rate}");
    assert!(ks_rate > 0.88, "KS pass rate {ks_rate}");
}

#[test]
fn test_p_values_spread_over_unit_interval() {
    // Under the null hypothesis p-values are uniform; both halves should be hit
    let mut low = 0;
    let mut high = 0;
    for trial in 0..100 {
        let batch = generate(GeneratorKind::MersenneTwister, 50_000 + trial, 2_000).unwrap();
        let p = kolmogorov_smirnov_test(&batch).unwrap().p_value;
        if p < 0.5 {
            low += 1;
        } else {
            high += 1;
        }
    }
    assert!(low > 25 && high > 25, "p-values skewed: {low} below 0.5, {high} above");
}

#[test]
fn test_stalled_xorshift_fails_both_tests() {
    let batch = generate(GeneratorKind::XorShift, 0, 1_000).unwrap();

    let ks = kolmogorov_smirnov_test(&batch).unwrap();
    assert_eq!(ks.statistic, 1.0);
    assert!(!ks.consistent);

    // Every sample lands in a single bin of the widened range
    let chi = chi_square_test(&batch).unwrap();
    assert!(!chi.consistent);
}
