//! Game events.
//!
//! Events are what the engine reports back from each action: rooms dealt,
//! deferrals, card resolutions, carries, and the end of the game. They
//! carry everything a presentation layer needs to narrate the game.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::effects::Effect;
use crate::zones::Slot;

use super::engine::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new room was dealt.
    RoomEntered { number: u32, cards: Vec<Card> },

    /// Deferral is exhausted; this room must be faced.
    MustFace,

    /// The room went back into the deck. `count` is the deferral streak.
    Deferred { count: u8 },

    /// The player chose to face the room.
    Faced,

    /// A card was resolved.
    Resolved { slot: Slot, effect: Effect },

    /// The unresolved card moves on to the next room.
    Carried { card: Card },

    /// The required cards of a room have all been resolved.
    RoomCompleted { number: u32 },

    GameOver { result: GameResult },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::RoomEntered { number, .. } => write!(f, "--- Dungeon Room {} ---", number),
            GameEvent::MustFace => f.write_str("You've skipped too many rooms! You must face this one."),
            GameEvent::Deferred { count } => write!(f, "You slip away from the room ({} in a row).", count),
            GameEvent::Faced => f.write_str("You step into the room."),
            GameEvent::Resolved { effect, .. } => write!(f, "{}", effect),
            GameEvent::Carried { card } => write!(f, "The last card ({}) carries to the next room.", card),
            GameEvent::RoomCompleted { number } => write!(f, "Room {} cleared.", number),
            GameEvent::GameOver { result } => write!(f, "{}", result),
        }
    }
}
