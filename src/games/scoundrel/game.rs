//! Scoundrel game implementation.

use crate::cards::Card;
use crate::core::config::MIN_DECK_FOR_ROOM;
use crate::core::{Action, ActionRecord, DeckSetup, GameConfig, GameRng, GameState, Phase};
use crate::error::ActionError;
use crate::resolution::RoomResolution;
use crate::rules::{GameEvent, GameResult, RulesEngine};
use crate::zones::{Deck, Room, Slot};

/// The Scoundrel rules engine.
#[derive(Clone, Debug, Default)]
pub struct ScoundrelGame {
    config: GameConfig,
}

/// Builder for creating a ScoundrelGame.
#[derive(Clone, Debug, Default)]
pub struct ScoundrelBuilder {
    config: GameConfig,
}

impl ScoundrelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Deal from these cards, front first, instead of a shuffled dungeon deck.
    pub fn stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.config = self.config.with_stacked_deck(cards);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game and deal its first room.
    pub fn build(self) -> (ScoundrelGame, GameState) {
        let game = ScoundrelGame::new(self.config);
        let (state, _) = game.new_game();
        (game, state)
    }
}

impl ScoundrelGame {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game: prepare the deck and deal the first room.
    ///
    /// Without a configured seed every call plays a different dungeon.
    pub fn new_game(&self) -> (GameState, Vec<GameEvent>) {
        let rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        self.start(rng)
    }

    /// Rebuild a game from its seed and action history.
    pub fn replay<'a, I>(&self, seed: u64, history: I) -> Result<GameState, ActionError>
    where
        I: IntoIterator<Item = &'a ActionRecord>,
    {
        let (mut state, _) = self.start(GameRng::new(seed));
        for record in history {
            self.apply_action(&mut state, record.action)?;
        }
        Ok(state)
    }

    fn start(&self, mut rng: GameRng) -> (GameState, Vec<GameEvent>) {
        let deck = match &self.config.deck {
            DeckSetup::Shuffled => {
                let mut deck = Deck::dungeon();
                deck.shuffle(&mut rng);
                deck
            }
            DeckSetup::Stacked(cards) => Deck::from_cards(cards.clone()),
        };
        tracing::info!(seed = rng.seed(), deck = deck.len(), "game started");

        let mut state = GameState::new(deck, rng);
        let mut events = Vec::new();
        self.advance(&mut state, &mut events);
        (state, events)
    }

    /// Deal the next room, or end the game if it cannot continue.
    fn advance(&self, state: &mut GameState, events: &mut Vec<GameEvent>) {
        if !state.player.is_alive() {
            self.finish(state, GameResult::Dead, events);
            return;
        }
        if state.deck.len() < MIN_DECK_FOR_ROOM {
            self.finish(state, GameResult::Cleared, events);
            return;
        }

        state.room_number += 1;
        let room = Room::build(&mut state.carried, &mut state.deck);
        tracing::info!(
            room = state.room_number,
            cards = ?room.cards(),
            deck = state.deck.len(),
            "room entered"
        );
        events.push(GameEvent::RoomEntered {
            number: state.room_number,
            cards: room.cards().to_vec(),
        });

        if state.deferral.may_defer() {
            state.phase = Phase::AwaitingDeferral;
        } else {
            events.push(GameEvent::MustFace);
            state.phase = Phase::Resolving;
        }
        state.room = Some(RoomResolution::new(room));
    }

    fn finish(&self, state: &mut GameState, result: GameResult, events: &mut Vec<GameEvent>) {
        tracing::info!(?result, health = state.player.health(), rooms = state.room_number, "game over");
        state.phase = Phase::Finished(result);
        events.push(GameEvent::GameOver { result });
    }

    fn defer(&self, state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let Some(resolution) = state.room.take() else {
            return Err(ActionError::WrongPhase {
                action: Action::Defer.name(),
                phase: state.phase,
            });
        };
        if let Err(err) = state.deferral.on_defer() {
            state.room = Some(resolution);
            return Err(err);
        }

        let cards = resolution.into_room().into_cards();
        state.deck.return_and_reshuffle(cards, &mut state.rng);
        tracing::info!(streak = state.deferral.deferred(), "room deferred");
        events.push(GameEvent::Deferred {
            count: state.deferral.deferred(),
        });

        self.advance(state, events);
        Ok(())
    }

    fn resolve(&self, state: &mut GameState, slot: Slot, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let Some(resolution) = state.room.as_mut() else {
            return Err(ActionError::WrongPhase {
                action: Action::Resolve(slot).name(),
                phase: state.phase,
            });
        };

        let effect = resolution.resolve(slot, &mut state.player)?;
        tracing::debug!(
            %slot,
            card = %effect.card(),
            delta = effect.health_delta(),
            health = state.player.health(),
            "card resolved"
        );
        events.push(GameEvent::Resolved { slot, effect });

        if !state.player.is_alive() {
            state.room = None;
            self.finish(state, GameResult::Dead, events);
            return Ok(());
        }
        if !resolution.is_complete() {
            return Ok(());
        }

        let carry = resolution.carry();
        state.room = None;
        state.carried = carry;
        if let Some(card) = carry {
            events.push(GameEvent::Carried { card });
        }
        state.deferral.on_room_resolved();
        events.push(GameEvent::RoomCompleted {
            number: state.room_number,
        });

        self.advance(state, events);
        Ok(())
    }
}

impl RulesEngine for ScoundrelGame {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        match state.phase {
            Phase::AwaitingDeferral => vec![Action::Defer, Action::Face],
            Phase::Resolving => state
                .room
                .iter()
                .flat_map(|r| r.unresolved())
                .map(|(slot, _)| Action::Resolve(slot))
                .collect(),
            Phase::Finished(_) => vec![],
        }
    }

    fn apply_action(&self, state: &mut GameState, action: Action) -> Result<Vec<GameEvent>, ActionError> {
        let room = state.room_number;
        let mut events = Vec::new();

        match (action, state.phase) {
            (_, Phase::Finished(_)) => return Err(ActionError::GameOver),
            (Action::Defer, Phase::AwaitingDeferral) => self.defer(state, &mut events)?,
            (Action::Face, Phase::AwaitingDeferral) => {
                state.phase = Phase::Resolving;
                events.push(GameEvent::Faced);
            }
            (Action::Resolve(slot), Phase::Resolving) => self.resolve(state, slot, &mut events)?,
            (action, phase) => {
                return Err(ActionError::WrongPhase {
                    action: action.name(),
                    phase,
                })
            }
        }

        tracing::debug!(room, %action, "action applied");
        state.record(room, action);
        Ok(events)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match state.phase {
            Phase::Finished(result) => Some(result),
            _ => None,
        }
    }
}
