//! Deterministic random number generation for deck shuffling.
//!
//! Shuffling is a pre-step over the raw card tokens and never affects the
//! protocol itself. A seeded `GameRng` makes a shuffled game reproducible:
//!
//! ```
//! use rust_shedding::core::GameRng;
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! GameRng::new(7).shuffle(&mut a);
//! GameRng::new(7).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG.
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

    /// Create an RNG from a fresh random seed.
    ///
    /// The chosen seed is available through [`GameRng::seed`] so the
    /// shuffle can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
