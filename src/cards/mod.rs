//! Card types.
//!
//! - `Suit`: closed set of four suits
//! - `Category`: what a suit does when resolved (Monster, Weapon, Potion)
//! - `Rank`: validated 2..=14 rank with face-card display
//! - `Card`: a suit and rank that belongs in the dungeon deck

pub mod card;

pub use card::{Card, Category, Rank, Suit};
