use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};
use std::sync::{Mutex, PoisonError};

/// Source of uniformly distributed indices.
///
/// Callers never pass `len == 0`; implementations must return a value in
/// `0..len`.
pub trait IndexSource: Send + Sync {
    fn index(&self, len: usize) -> usize;
}

/// Draws from the thread-local RNG. The default for a running server.
#[derive(Debug, Default)]
pub struct ThreadRngIndex {}

impl IndexSource for ThreadRngIndex {
    fn index(&self, len: usize) -> usize {
        rng().random_range(0..len)
    }
}

/// Reproducible sequence of draws from a fixed seed.
#[derive(Debug)]
pub struct SeededIndex {
    rng: Mutex<StdRng>,
}

impl SeededIndex {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexSource for SeededIndex {
    fn index(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable RNG state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..len)
    }
}
