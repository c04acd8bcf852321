//! Random sources for the `rand` and `randint` functions.
//!
//! A registry holds one source behind an `Arc` and calls it from whichever
//! thread evaluates. Implementations must be safe to share that way; the
//! trait's `Send + Sync` bound only guarantees it is allowed, not that a
//! particular sequence is reproducible across threads.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Mutex, PoisonError};

pub trait RandomSource: Send + Sync {
    /// Uniform in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Uniform in `[0, bound)`. `bound` is always positive.
    fn next_below(&self, bound: u64) -> u64;
}

/// Thread-local generator; the default for [`Registry::new`](crate::Registry::new).
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn next_below(&self, bound: u64) -> u64 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Reproducible xoshiro256** sequence.
///
/// Calls from several threads are serialized by a mutex, so the sequence is
/// shared rather than per-thread.
pub struct SeededRandom {
    rng: Mutex<Xoshiro256StarStar>,
}

impl SeededRandom {
    pub fn new(seed: [u8; 32]) -> Self {
        SeededRandom {
            rng: Mutex::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_exact_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        SeededRandom::new(bytes)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen::<f64>()
    }

    fn next_below(&self, bound: u64) -> u64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededRandom::from_u64(42);
        let b = SeededRandom::from_u64(42);
        for _ in 0..16 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
            assert_eq!(a.next_below(1000), b.next_below(1000));
        }
    }

    #[test]
    fn values_stay_in_range() {
        let source = SeededRandom::from_u64(7);
        for _ in 0..1000 {
            let f = source.next_f64();
            assert!((0.0..1.0).contains(&f));
            assert!(source.next_below(3) < 3);
        }
    }
}
