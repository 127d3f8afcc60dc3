//! Error types for the dungeon engine.
//!
//! Every error here except [`DeckError`] is recoverable: the caller reports
//! it and asks again, and the game state is left untouched.

use crate::cards::Suit;
use crate::core::Phase;

/// Errors from applying an [`Action`](crate::core::Action) to a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The chosen position is outside `1..=room_size`.
    #[error("invalid choice {position}: pick a card between 1 and {room_size}")]
    InvalidSelection { position: usize, room_size: usize },

    /// The chosen card has already been resolved this room.
    #[error("card {position} has already been resolved")]
    DuplicateSelection { position: usize },

    /// Every required card of the room has already been resolved.
    #[error("this room is already resolved")]
    RoomComplete,

    /// Deferral was requested after the consecutive-deferral cap was reached.
    #[error("cannot defer: {deferred} rooms deferred in a row")]
    DeferralUnavailable { deferred: u8 },

    /// The action is not legal in the current phase.
    #[error("{action} is not allowed while {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
}

/// Errors from parsing raw player input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Anything other than y/n at the deferral prompt.
    #[error("invalid input {0:?}: please enter 'y' or 'n'")]
    InvalidDeferResponse(String),

    /// A card choice that is not a number.
    #[error("invalid choice {0:?}: enter a card number")]
    NotANumber(String),

    /// A numeric card choice that fails room validation.
    #[error(transparent)]
    Selection(#[from] ActionError),
}

/// Deck access errors.
///
/// Drawing from an empty deck means a caller skipped its length guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("drew from an empty dungeon deck")]
    Empty,
}

/// Errors constructing a card outside the dungeon deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("rank {0} is outside 2..=14")]
    RankOutOfRange(u8),

    #[error("{suit} rank {rank} is removed from the dungeon deck")]
    RemovedFromDungeon { suit: Suit, rank: u8 },
}
