//! Seeded randomness for the dungeon.
//!
//! Shuffling the deck (at the start and after every deferral) is the only
//! random rule in the game, so a seed plus the action history pins a run
//! down completely. Random policies draw from their own `GameRng` so they
//! never disturb the deck's stream.
//!
//! ```
//! use rust_scoundrel::core::GameRng;
//! use rust_scoundrel::zones::Deck;
//!
//! let mut first = Deck::dungeon();
//! let mut second = Deck::dungeon();
//! first.shuffle(&mut GameRng::new(42));
//! second.shuffle(&mut GameRng::new(42));
//!
//! assert_eq!(first, second);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream that remembers the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a fresh seed. It is still recorded for replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Uniform pick, `None` on an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Seed and stream position, for snapshots.
    ///
    /// Two games that shuffled the same number of times from the same seed
    /// report equal states, which is what replay checks compare.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }
}

/// Where a [`GameRng`] stands in its stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}
