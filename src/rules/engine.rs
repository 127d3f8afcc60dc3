//! Rules engine trait for game implementations.
//!
//! The game implements `RulesEngine` to define:
//! - What actions are legal
//! - How actions modify state
//! - When the game is over

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::state::GameState;
use crate::error::ActionError;

use super::event::GameEvent;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The deck ran low with the player still standing.
    Cleared,
    /// Health dropped to zero or below.
    Dead,
}

impl GameResult {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, GameResult::Cleared)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Cleared => f.write_str("Congratulations! You cleared the dungeon and escaped!"),
            GameResult::Dead => f.write_str("It seems you couldn't escape after all..."),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec once the game is over
/// - `apply_action`: Must be deterministic given the state's RNG, and must
///   leave the state untouched when it returns an error
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get legal actions for the current decision point.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action to the game state.
    ///
    /// Returns the events it caused, in order.
    fn apply_action(&self, state: &mut GameState, action: Action) -> Result<Vec<GameEvent>, ActionError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether an action is currently legal.
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_win() {
        assert!(GameResult::Cleared.is_win());
        assert!(!GameResult::Dead.is_win());
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(
            GameResult::Dead.to_string(),
            "It seems you couldn't escape after all..."
        );
    }
}
