//! Game state.
//!
//! ## GameState
//!
//! Everything one game owns, passed explicitly through every engine call:
//! - Dungeon deck and the game RNG that shuffles it
//! - Player health and weapon
//! - Carried card and deferral streak
//! - Current phase and the room being played
//! - Action history
//!
//! ## GameSnapshot
//!
//! Serializable view of a `GameState` for presentation layers.

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::PlayerState;
use super::rng::{GameRng, GameRngState};
use crate::cards::Card;
use crate::resolution::RoomResolution;
use crate::rules::{DeferralPolicy, GameResult};
use crate::zones::{Deck, Room, Slot};

/// Where the game is waiting for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A room is dealt and may be deferred.
    AwaitingDeferral,
    /// A room is being resolved card by card.
    Resolving,
    /// The game has ended.
    Finished(GameResult),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingDeferral => f.write_str("deciding whether to defer"),
            Phase::Resolving => f.write_str("resolving a room"),
            Phase::Finished(_) => f.write_str("the game is over"),
        }
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) player: PlayerState,
    pub(crate) carried: Option<Card>,
    pub(crate) deferral: DeferralPolicy,
    pub(crate) phase: Phase,
    /// Room in play. `None` between rooms and after the game ends.
    pub(crate) room: Option<RoomResolution>,
    /// Rooms dealt so far, deferred ones included.
    pub(crate) room_number: u32,
    pub(crate) history: Vec<ActionRecord>,

    /// Deterministic RNG.
    pub(crate) rng: GameRng,
}

impl GameState {
    /// A state with a prepared deck, before the first room is dealt.
    ///
    /// Only the engine builds one, and it deals the first room at once.
    #[must_use]
    pub(crate) fn new(deck: Deck, rng: GameRng) -> Self {
        Self {
            deck,
            player: PlayerState::new(),
            carried: None,
            deferral: DeferralPolicy::new(),
            phase: Phase::Resolving,
            room: None,
            room_number: 0,
            history: Vec::new(),
            rng,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn carried(&self) -> Option<Card> {
        self.carried
    }

    #[must_use]
    pub fn deferral(&self) -> &DeferralPolicy {
        &self.deferral
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The room currently in play, with its resolution progress.
    #[must_use]
    pub fn resolution(&self) -> Option<&RoomResolution> {
        self.room.as_ref()
    }

    #[must_use]
    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref().map(RoomResolution::room)
    }

    #[must_use]
    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Append an accepted action to the history.
    pub(crate) fn record(&mut self, room: u32, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord::new(room, action, sequence));
    }

    /// Capture a serializable view of the state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            room_number: self.room_number,
            room: self.room().map(|r| r.cards().to_vec()).unwrap_or_default(),
            resolved: self
                .room
                .as_ref()
                .map(|r| r.resolved().to_vec())
                .unwrap_or_default(),
            player: self.player.clone(),
            carried: self.carried,
            deck_size: self.deck.len(),
            deferred: self.deferral.deferred(),
            rng: self.rng.state(),
        }
    }
}

/// Serializable view of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub room_number: u32,
    /// Cards of the room in play, in slot order.
    pub room: Vec<Card>,
    /// Slots resolved so far, in pick order.
    pub resolved: Vec<Slot>,
    pub player: PlayerState,
    pub carried: Option<Card>,
    pub deck_size: usize,
    pub deferred: u8,
    pub rng: GameRngState,
}
