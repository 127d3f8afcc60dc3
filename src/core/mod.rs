//! Core engine types: players, state, actions, RNG, configuration.
//!
//! This module holds the building blocks every other module shares.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::PlayerState;
pub use rng::{GameRng, GameRngState};
pub use config::{DeckSetup, GameConfig};
pub use action::{Action, ActionRecord};
pub use state::{GameSnapshot, GameState, Phase};
