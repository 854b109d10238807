//! Seedable RNG for candidate hint sampling.
//!
//! Hint sampling only bounds prompt size, so it never affects which moves
//! are legal. It is still seedable so a run can be replayed with the same
//! hints given the same oracle replies.
//!
//! ```
//! use word_ladder::core::LadderRng;
//!
//! let mut a = LadderRng::new(42);
//! let mut b = LadderRng::new(42);
//!
//! let items: Vec<u32> = (0..50).collect();
//! assert_eq!(a.sample(items.clone(), 5), b.sample(items, 5));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct LadderRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LadderRng {
    /// Create an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    ///
    /// The drawn seed is kept so it can be logged and reused.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Cap `items` at `limit` entries.
    ///
    /// Lists already within the limit are returned untouched. Larger lists
    /// are shuffled uniformly and truncated.
    pub fn sample<T>(&mut self, mut items: Vec<T>, limit: usize) -> Vec<T> {
        if items.len() <= limit {
            return items;
        }
        self.shuffle(&mut items);
        items.truncate(limit);
        items
    }
}
