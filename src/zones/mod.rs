//! Card locations.
//!
//! ## Key Types
//!
//! - `Deck`: the ordered dungeon deck (draw from front, return and reshuffle)
//! - `Room`: the up-to-four cards dealt for one turn
//! - `Slot`: a card's position inside a room

pub mod deck;
pub mod room;

pub use deck::Deck;
pub use room::{Room, Slot};
