//! Deterministic random number generation for coin tosses.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical toss sequences
//! - **Context streams**: Independent sequences for different purposes
//!   (the opening toss never disturbs in-game rolls)
//!
//! ```
//! use patolli::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread RNG.
    ///
    /// The drawn seed is kept, so the game can still be replayed from
    /// `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_bool(0.5), rng2.gen_bool(0.5));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..64).map(|_| rng1.gen_bool(0.5)).collect();
        let seq2: Vec<_> = (0..64).map(|_| rng2.gen_bool(0.5)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let rng1 = GameRng::new(42);
        let rng2 = GameRng::new(42);

        let mut ctx1 = rng1.for_context("opening");
        let mut ctx2 = rng2.for_context("opening");
        assert_eq!(ctx1.seed(), ctx2.seed());

        for _ in 0..10 {
            assert_eq!(ctx1.gen_bool(0.5), ctx2.gen_bool(0.5));
        }
    }

    #[test]
    fn test_context_differs_from_parent() {
        let rng = GameRng::new(42);
        assert_ne!(rng.for_context("opening").seed(), rng.seed());
        assert_ne!(
            rng.for_context("opening").seed(),
            rng.for_context("tosses").seed()
        );
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let mut a = GameRng::new(rng.seed());
        let mut b = rng.clone();
        assert_eq!(a.gen_bool(0.5), b.gen_bool(0.5));
    }
}
