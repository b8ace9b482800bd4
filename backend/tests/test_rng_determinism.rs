//! Tests for SimRng determinism
//!
//! Reproducible runs depend on the RNG producing an identical sequence for
//! an identical seed.

use checkout_simulator_core_rs::SimRng;

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = SimRng::new(12345);
    let mut rng2 = SimRng::new(12345);

    for _ in 0..1000 {
        assert_eq!(rng1.next_u64(), rng2.next_u64());
    }
}

#[test]
fn test_same_seed_same_derived_draws() {
    let mut rng1 = SimRng::new(99999);
    let mut rng2 = SimRng::new(99999);

    for _ in 0..1000 {
        assert_eq!(rng1.next_f64(), rng2.next_f64());
        assert_eq!(rng1.range(1, 50), rng2.range(1, 50));
        assert_eq!(rng1.chance(0.3), rng2.chance(0.3));
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = SimRng::new(1);
    let mut rng2 = SimRng::new(2);

    let first: Vec<u64> = (0..10).map(|_| rng1.next_u64()).collect();
    let second: Vec<u64> = (0..10).map(|_| rng2.next_u64()).collect();
    assert_ne!(first, second);
}

#[test]
fn test_range_stays_in_bounds() {
    let mut rng = SimRng::new(777);

    for _ in 0..10_000 {
        let value = rng.range(1, 50);
        assert!((1..50).contains(&value), "range produced {}", value);
    }
}

#[test]
fn test_chance_frequency_is_plausible() {
    let mut rng = SimRng::new(42);

    let hits = (0..10_000).filter(|_| rng.chance(0.5)).count();
    // Fixed seed makes this exact count reproducible; the band just guards
    // against a broken generator
    assert!((4500..=5500).contains(&hits), "got {} hits", hits);
}
