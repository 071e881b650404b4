//! Injectable randomness for shuffling clues and fragments.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha12Rng;
use tracing::instrument;

/// A source of uniform permutations.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests can implement this trait
/// directly to fix the exact order produced by a load.
pub trait RandomSource {
    /// Permutes `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }
}

/// Reproducible random source backed by ChaCha12.
///
/// The same seed always yields the same clue order and fragment layout.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha12Rng,
}

impl SeededRandom {
    /// Creates a source from a fixed seed.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from the thread-local generator.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha12Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl RandomSource for SeededRandom {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, &mut self.rng);
    }
}
