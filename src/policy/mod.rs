//! Automated players.
//!
//! Policies are trait-based so the console binary and tests can swap them:
//! - `RandomPolicy`: uniform among legal actions
//! - `GreedyPolicy`: one-room lookahead over resolution orders

mod greedy;

pub use greedy::GreedyPolicy;

use crate::core::{Action, GameRng, GameState};
use crate::error::ActionError;
use crate::rules::{GameResult, RulesEngine};

/// Chooses actions for one game.
pub trait Policy {
    /// Pick one of `legal`. Returns `None` only when `legal` is empty.
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Option<Action>;
}

/// Uniformly random legal actions from its own RNG.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, legal: &[Action]) -> Option<Action> {
        self.rng.choose(legal).copied()
    }
}

/// Play a game to the end, letting `policy` make every decision.
pub fn play_out<E, P>(game: &E, state: &mut GameState, policy: &mut P) -> Result<GameResult, ActionError>
where
    E: RulesEngine,
    P: Policy + ?Sized,
{
    loop {
        if let Some(result) = game.is_terminal(state) {
            return Ok(result);
        }

        let legal = game.legal_actions(state);
        let action = policy.choose(state, &legal).ok_or(ActionError::GameOver)?;
        game.apply_action(state, action)?;
    }
}
