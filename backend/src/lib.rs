//! PRNG Suite Core - Rust Engine
//!
//! Seedable pseudorandom number generators behind one contract, and a
//! statistical harness that checks whether their output looks uniform.
//!
//! # Architecture
//!
//! - **rng**: Generator contract, LCG, xorshift32, MT19937, variant registry
//! - **stats**: Chi-square and Kolmogorov–Smirnov goodness-of-fit tests
//! - **suite**: Runs every generator through the harness and writes reports
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, for every generator
//! 2. Raw draws always lie in [0.0, 1.0)
//! 3. Failed operations never advance generator state
//!
//! None of the generators are suitable for cryptographic use.

// Module declarations
pub mod rng;
pub mod stats;
pub mod suite;

// Re-exports for convenience
pub use rng::{
    Generator, GeneratorError, GeneratorKind, LinearCongruential, MersenneTwister, PseudoRandom,
    XorShift32,
};
pub use stats::{
    chi_square_test, kolmogorov_smirnov_test, BinRange, ChiSquareResult, HarnessConfig,
    KolmogorovSmirnovResult, ReferenceDistribution, StatsError,
};
pub use suite::{run_suite, SuiteConfig, SuiteError, SuiteReport};
