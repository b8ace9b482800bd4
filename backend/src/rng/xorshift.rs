//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG suitable for simulation purposes. Every run of
//! the checkout simulator draws all of its randomness (arrival decisions,
//! basket sizes) from a single run-scoped instance.
//!
//! # Determinism
//!
//! Same seed → same sequence. This is what makes a run reproducible:
//! identical seed and config produce an identical simulation, which the
//! test suite relies on.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use checkout_simulator_core_rs::SimRng;
///
/// let mut rng = SimRng::new(12345);
/// let items = rng.range(1, 50); // uniform in [1, 50)
/// assert!((1..50).contains(&items));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRng {
    /// Internal state (64-bit), never zero
    state: u64,
}

impl SimRng {
    /// Create a new RNG with the given seed
    ///
    /// A zero seed is coerced to 1 (xorshift requires nonzero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64, advancing the internal state
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random f64 in [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a random value in [min, max)
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn range(&mut self, min: u64, max: u64) -> u64 {
        assert!(min < max, "min must be less than max");

        let range_size = max - min;
        min + self.next_u64() % range_size
    }

    /// Single Bernoulli trial: true with probability `p`
    ///
    /// `p <= 0.0` never fires; `p >= 1.0` always fires.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Current RNG state (for replay)
    pub fn state(&self) -> u64 {
        self.state
    }
}
