//! The dungeon deck.
//!
//! An ordered pile of cards. Rooms draw from the front; deferred rooms are
//! appended to the back and the whole deck is reshuffled.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::rng::GameRng;
use crate::error::DeckError;

/// Ordered deck of dungeon cards. Index 0 is the front (next card drawn).
///
/// ## Usage
///
/// ```
/// use rust_scoundrel::core::GameRng;
/// use rust_scoundrel::zones::Deck;
///
/// let mut deck = Deck::dungeon();
/// assert_eq!(deck.len(), 40);
///
/// deck.shuffle(&mut GameRng::new(42));
/// let first = deck.draw_front().unwrap();
/// assert_eq!(deck.len(), 39);
/// # let _ = first;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the unshuffled 40-card dungeon deck.
    ///
    /// Suit-major, rank-minor order. Red face cards and red aces are left out.
    #[must_use]
    pub fn dungeon() -> Self {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| (Rank::MIN..=Rank::MAX).filter_map(move |rank| Card::new(suit, rank).ok()))
            .collect()
    }

    /// Create a deck with the given cards, front first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards: cards.into() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Randomly permute the whole deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the front card.
    pub fn draw_front(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Put cards back at the end of the deck, then reshuffle everything.
    pub fn return_and_reshuffle<I>(&mut self, cards: I, rng: &mut GameRng)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        self.shuffle(rng);
        tracing::debug!(size = self.cards.len(), "deck reshuffled");
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
