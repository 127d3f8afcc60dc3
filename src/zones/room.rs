//! Rooms: the cards dealt for one turn.
//!
//! A room holds up to [`ROOM_SIZE`] cards in the order they were dealt. The
//! carried card from the previous room, if any, always takes the first slot.
//! Players pick cards by slot, so the order is stable for the whole room.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::ROOM_SIZE;

use super::deck::Deck;

/// Position of a card within a room (0-based).
///
/// Displayed 1-based, matching what a player types.
///
/// ```
/// use rust_scoundrel::zones::Slot;
///
/// let slot = Slot::from_position(3).unwrap();
/// assert_eq!(slot.index(), 2);
/// assert_eq!(slot.to_string(), "3");
/// assert!(Slot::from_position(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot(pub u8);

impl Slot {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Convert a 1-based position. `None` for 0 or anything past a full room.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        (1..=ROOM_SIZE)
            .contains(&position)
            .then(|| Self((position - 1) as u8))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based position.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0 as usize + 1
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.position())
    }
}

/// The cards of one room, in deal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    cards: SmallVec<[Card; ROOM_SIZE]>,
}

impl Room {
    /// Deal a room.
    ///
    /// Takes the carried card (clearing it) into the first slot, then draws
    /// from the front of the deck until the room is full or the deck runs out.
    pub fn build(carried: &mut Option<Card>, deck: &mut Deck) -> Self {
        let mut cards = SmallVec::new();
        cards.extend(carried.take());

        while cards.len() < ROOM_SIZE && !deck.is_empty() {
            let card = deck.draw_front().expect("deck length checked before draw");
            cards.push(card);
        }

        Self { cards }
    }

    /// Create a room from explicit cards.
    ///
    /// Panics if given more than a full room.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        assert!(cards.len() <= ROOM_SIZE, "a room holds at most {} cards", ROOM_SIZE);
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<Card> {
        self.cards.get(slot.index()).copied()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate cards with their slots.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, &card)| (Slot(i as u8), card))
    }

    /// Give the cards back, for returning a deferred room to the deck.
    #[must_use]
    pub fn into_cards(self) -> SmallVec<[Card; ROOM_SIZE]> {
        self.cards
    }
}
