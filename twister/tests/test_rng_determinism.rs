//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use mersenne_twister_core_rs::Mt19937;
use proptest::prelude::*;

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = Mt19937::new(12345);
    let mut rng2 = Mt19937::new(12345);

    // Same seed should produce same sequence
    for _ in 0..100 {
        let val1 = rng1.next_u32();
        let val2 = rng2.next_u32();
        assert_eq!(val1, val2, "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = Mt19937::new(12345);
    let mut rng2 = Mt19937::new(54321);

    let val1 = rng1.next_u32();
    let val2 = rng2.next_u32();

    assert_ne!(
        val1, val2,
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_cursor_wraps_after_full_pass() {
    let mut rng = Mt19937::new(12345);
    assert_eq!(rng.cursor(), 624, "Fresh generator starts exhausted");

    rng.next_u32();
    assert_eq!(rng.cursor(), 1);

    for _ in 1..624 {
        rng.next_u32();
    }
    assert_eq!(rng.cursor(), 624);
    let words_before = *rng.words();

    rng.next_u32();
    assert_eq!(rng.cursor(), 1, "Cursor should wrap from 624 to 1");
    assert_ne!(*rng.words(), words_before, "Wrap should regenerate the state");
}

#[test]
fn test_rng_replay_from_clone() {
    let mut rng1 = Mt19937::new(12345);

    // Generate some values
    for _ in 0..10 {
        rng1.next_u32();
    }

    let mut rng2 = rng1.clone();

    // Clone continues the same stream, across a twist boundary too
    for i in 0..1000 {
        assert_eq!(rng1.next_u32(), rng2.next_u32(), "Replay diverged at {}", i);
    }
}

#[test]
fn test_rng_long_sequence_determinism() {
    let mut rng1 = Mt19937::from_key(&[42, 43]).unwrap();
    let mut rng2 = Mt19937::from_key(&[42, 43]).unwrap();

    // Several full twists
    for i in 0..5000 {
        let val1 = rng1.next_u32();
        let val2 = rng2.next_u32();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = Mt19937::new(12345);
    let mut values = Vec::new();

    for _ in 0..100 {
        values.push(rng.next_u32());
    }

    // Check that we got diverse values (not all the same)
    let unique_count = values
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert!(
        unique_count > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        unique_count
    );
}

#[test]
fn test_next_f64_consumes_two_draws() {
    let mut floats = Mt19937::new(2024);
    let mut ints = Mt19937::new(2024);

    floats.next_f64();
    ints.next_u32();
    ints.next_u32();

    assert_eq!(floats.next_u32(), ints.next_u32());
}

#[test]
fn test_reseed_with_key_matches_from_key() {
    let key = [0x123, 0x234, 0x345, 0x456];
    let mut rng = Mt19937::new(1);
    rng.next_f64();
    rng.reseed_with_key(&key).unwrap();

    assert_eq!(rng, Mt19937::from_key(&key).unwrap());
}

proptest! {
    #[test]
    fn prop_next_f64_in_unit_interval(seed in any::<u32>()) {
        let mut rng = Mt19937::new(seed);
        for _ in 0..700 {
            let val = rng.next_f64();
            prop_assert!((0.0..1.0).contains(&val), "{} outside [0.0, 1.0)", val);
        }
    }

    #[test]
    fn prop_array_seed_deterministic(key in prop::collection::vec(any::<u32>(), 1..700)) {
        let mut rng1 = Mt19937::from_key(&key).unwrap();
        let mut rng2 = Mt19937::from_key(&key).unwrap();
        prop_assert_eq!(rng1.words()[0], 0x8000_0000);
        for _ in 0..50 {
            prop_assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn prop_cursor_stays_in_bounds(seed in any::<u32>(), draws in 0usize..2000) {
        let mut rng = Mt19937::new(seed);
        for _ in 0..draws {
            rng.next_u32();
            prop_assert!(rng.cursor() >= 1 && rng.cursor() <= 624);
        }
    }
}
