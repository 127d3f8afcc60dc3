//! # rust-scoundrel
//!
//! Engine for Scoundrel, a single-player dungeon crawl played with a
//! trimmed deck of standard cards.
//!
//! ## Rules in Brief
//!
//! 1. **The Deck**: 40 cards. Spades and Clubs are monsters, Diamonds are
//!    weapons, Hearts are potions. Red face cards and red aces are removed.
//!
//! 2. **Rooms**: Each turn deals a room of up to four cards. The room may be
//!    deferred back into the deck, but never more than twice in a row.
//!
//! 3. **Resolution**: A faced room has three of its cards resolved in the
//!    order the player picks. The fourth carries into the next room.
//!
//! The game ends in defeat when health reaches zero, and in victory when the
//! deck can no longer fill a room.
//!
//! ## Architecture
//!
//! - **Explicit State**: A `GameState` value owns the deck, the player, the
//!   room in play, and the RNG. The engine is stateless apart from config.
//!
//! - **Deterministic Replay**: All randomness comes from a seeded ChaCha8
//!   RNG, so a seed plus the action history reproduces a game exactly.
//!
//! - **Recoverable Errors**: Illegal actions come back as `ActionError` and
//!   leave the state untouched.
//!
//! ## Modules
//!
//! - `core`: Player state, game state, actions, RNG, configuration
//! - `cards`: Suits, ranks, and cards
//! - `zones`: The deck and rooms
//! - `effects`: Combat and card effects
//! - `resolution`: Per-room resolution tracking and carry-over
//! - `rules`: RulesEngine trait, deferral policy, events
//! - `games`: The Scoundrel rules engine
//! - `policy`: Automated players
//! - `input`: Parsing raw player input

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod resolution;
pub mod rules;
pub mod games;
pub mod policy;
pub mod input;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerState,
    GameRng, GameRngState,
    DeckSetup, GameConfig,
    Action, ActionRecord,
    GameSnapshot, GameState, Phase,
};

pub use crate::cards::{Card, Category, Rank, Suit};

pub use crate::zones::{Deck, Room, Slot};

pub use crate::effects::{Effect, EffectResolver};

pub use crate::resolution::RoomResolution;

pub use crate::rules::{DeferralPolicy, GameEvent, GameResult, RulesEngine};

pub use crate::games::scoundrel::{ScoundrelBuilder, ScoundrelGame};

pub use crate::policy::{play_out, GreedyPolicy, Policy, RandomPolicy};

pub use crate::error::{ActionError, CardError, DeckError, InputError};
