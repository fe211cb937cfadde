//! Error semantics and selection/shuffling laws of the generator contract

use prng_suite_core::rng::{
    Generator, GeneratorError, GeneratorKind, LinearCongruential, PseudoRandom, XorShift32,
};
use proptest::prelude::*;

fn seeded(kind: GeneratorKind, seed: u32) -> Generator {
    let mut rng = Generator::new(kind);
    rng.seed(seed);
    rng
}

// ============================================================================
// Uninitialized generators
// ============================================================================

#[test]
fn test_unseeded_operations_fail() {
    for kind in GeneratorKind::ALL {
        let mut rng = Generator::new(kind);
        assert_eq!(rng.next_raw(), Err(GeneratorError::Uninitialized));
        assert!(matches!(rng.random(), Err(GeneratorError::Uninitialized)));
        assert_eq!(rng.uniform(0.0, 1.0), Err(GeneratorError::Uninitialized));
        assert_eq!(rng.randint(0, 10), Err(GeneratorError::Uninitialized));
        assert_eq!(rng.choice(&[1, 2, 3]), Err(GeneratorError::Uninitialized));
    }
}

#[test]
fn test_unseeded_shuffle_leaves_slice_untouched() {
    let mut rng = XorShift32::new();
    let mut values = [1, 2, 3, 4, 5];
    assert_eq!(rng.shuffle(&mut values), Err(GeneratorError::Uninitialized));
    assert_eq!(values, [1, 2, 3, 4, 5]);
}

// ============================================================================
// Empty sequences and bounds
// ============================================================================

#[test]
fn test_choice_empty_sequence() {
    let mut rng = seeded(GeneratorKind::LinearCongruential, 1);
    let empty: Vec<String> = Vec::new();
    assert_eq!(rng.choice(&empty), Err(GeneratorError::EmptySequence));
}

#[test]
fn test_shuffle_empty_sequence() {
    let mut rng = seeded(GeneratorKind::XorShift, 1);
    let mut empty: [u32; 0] = [];
    assert_eq!(rng.shuffle(&mut empty), Err(GeneratorError::EmptySequence));
}

#[test]
fn test_inverted_bounds_rejected_without_consuming() {
    let mut rng = LinearCongruential::with_seed(10);
    let mut twin = LinearCongruential::with_seed(10);

    assert!(matches!(
        rng.randint(5, 1),
        Err(GeneratorError::InvalidRange { .. })
    ));
    assert!(matches!(
        rng.uniform(1.0, -1.0),
        Err(GeneratorError::InvalidRange { .. })
    ));
    assert_eq!(rng.next_raw(), twin.next_raw());
}

#[test]
fn test_uniform_equal_bounds_returns_low() {
    let mut rng = seeded(GeneratorKind::MersenneTwister, 3);
    assert_eq!(rng.uniform(2.5, 2.5).unwrap(), 2.5);
}

// ============================================================================
// Mapping formulas
// ============================================================================

#[test]
fn test_uniform_and_randint_map_one_raw_draw() {
    let mut raw = LinearCongruential::with_seed(12345);
    let r1 = raw.next_raw().unwrap();
    let r2 = raw.next_raw().unwrap();

    let mut rng = LinearCongruential::with_seed(12345);
    assert_eq!(rng.uniform(10.0, 20.0).unwrap(), 10.0 + 10.0 * r1);
    assert_eq!(rng.randint(0, 99).unwrap(), (100.0 * r2).floor() as i64);
}

#[test]
fn test_shuffle_follows_fisher_yates_order() {
    let mut draws = XorShift32::with_seed(17);
    let mut expected = vec!['a', 'b', 'c', 'd'];
    for i in (1..expected.len()).rev() {
        let j = draws.randint(0, i as i64).unwrap() as usize;
        expected.swap(i, j);
    }

    let mut rng = XorShift32::with_seed(17);
    let mut actual = vec!['a', 'b', 'c', 'd'];
    rng.shuffle(&mut actual).unwrap();
    assert_eq!(actual, expected);
}

// ============================================================================
// Properties
// ============================================================================

fn any_kind() -> impl Strategy<Value = GeneratorKind> {
    prop::sample::select(GeneratorKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(
        kind in any_kind(),
        seed in any::<u32>(),
        values in prop::collection::vec(any::<i32>(), 1..200),
    ) {
        let mut rng = seeded(kind, seed);
        let mut shuffled = values.clone();
        rng.shuffle(&mut shuffled).unwrap();

        let mut a = values;
        let mut b = shuffled;
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn choice_returns_a_member(
        kind in any_kind(),
        seed in any::<u32>(),
        values in prop::collection::vec(any::<u16>(), 1..100),
    ) {
        let mut rng = seeded(kind, seed);
        for _ in 0..20 {
            let picked = rng.choice(&values).unwrap();
            prop_assert!(values.contains(picked));
        }
    }
}

#[test]
fn test_shuffle_reaches_every_permutation_of_three() {
    let mut rng = seeded(GeneratorKind::MersenneTwister, 31337);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..600 {
        let mut v = [1, 2, 3];
        rng.shuffle(&mut v).unwrap();
        seen.insert(v);
    }
    assert_eq!(seen.len(), 6);
}
