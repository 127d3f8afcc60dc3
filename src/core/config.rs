//! Game configuration.
//!
//! The rules themselves are fixed: the constants below are the only numbers
//! the engine uses. `GameConfig` only describes how a run is set up
//! (which seed, which deck), never how the rules behave.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Starting health and the cap potions heal up to.
pub const MAX_HEALTH: i32 = 20;

/// Cards dealt into a full room.
pub const ROOM_SIZE: usize = 4;

/// Cards the player must resolve in a full room.
pub const RESOLUTIONS_PER_ROOM: usize = 3;

/// Rooms that may be deferred in a row before one must be faced.
pub const MAX_DEFERRED: u8 = 2;

/// A new room is only entered while the deck holds at least this many cards.
pub const MIN_DECK_FOR_ROOM: usize = 3;

/// How the dungeon deck is prepared.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckSetup {
    /// The 40-card dungeon deck, shuffled with the game RNG.
    #[default]
    Shuffled,
    /// A fixed card order, front of the deck first. Not shuffled at start;
    /// deferrals still reshuffle it.
    Stacked(Vec<Card>),
}

/// Setup for a single run.
///
/// ```
/// use rust_scoundrel::core::{DeckSetup, GameConfig};
///
/// let config = GameConfig::new().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.deck, DeckSetup::Shuffled);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` draws a fresh one.
    pub seed: Option<u64>,

    /// Deck preparation.
    #[serde(default)]
    pub deck: DeckSetup,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a stacked deck instead of a shuffled dungeon deck.
    #[must_use]
    pub fn with_stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.deck = DeckSetup::Stacked(cards);
        self
    }
}
