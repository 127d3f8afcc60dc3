//! Scoundrel: a single-player dungeon crawl with a standard deck.
//!
//! - The 40-card dungeon deck is a standard deck without red face cards
//!   and red aces
//! - Each room deals four cards; the player resolves three and carries the
//!   fourth into the next room
//! - Spades and Clubs are monsters, Diamonds are weapons, Hearts are potions
//! - A room may be deferred back into the deck, at most twice in a row
//! - The dungeon is cleared when fewer than three cards remain; the player
//!   dies at zero health

mod game;

pub use game::{ScoundrelBuilder, ScoundrelGame};
