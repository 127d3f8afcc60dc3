//! Room resolution.
//!
//! A faced room must have `min(3, room size)` of its cards resolved, one
//! at a time, in the order the player picks. Each card can be picked once.
//! When the room is done, the one card left over (full rooms only) is
//! carried into the next room.
//!
//! ## Example
//!
//! ```
//! use rust_scoundrel::cards::{Card, Suit};
//! use rust_scoundrel::core::PlayerState;
//! use rust_scoundrel::resolution::RoomResolution;
//! use rust_scoundrel::zones::{Room, Slot};
//!
//! let room = Room::from_cards(&[
//!     Card::new(Suit::Clubs, 10).unwrap(),
//!     Card::new(Suit::Diamonds, 6).unwrap(),
//!     Card::new(Suit::Hearts, 3).unwrap(),
//!     Card::new(Suit::Spades, 2).unwrap(),
//! ]);
//! let mut player = PlayerState::new();
//! let mut resolution = RoomResolution::new(room);
//!
//! for slot in [1, 3, 2] {
//!     resolution.resolve(Slot::new(slot), &mut player).unwrap();
//! }
//!
//! assert!(resolution.is_complete());
//! assert_eq!(resolution.carry(), Some(Card::new(Suit::Clubs, 10).unwrap()));
//! assert_eq!(player.health(), 20);
//! ```

mod tracker;

pub use tracker::RoomResolution;
