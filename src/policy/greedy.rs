//! Greedy lookahead over the room in play.
//!
//! With at most four cards and three picks there are only 24 orders, so the
//! policy simulates every one of them on a cloned `PlayerState` and keeps the
//! best.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::RESOLUTIONS_PER_ROOM;
use crate::core::{Action, GameState, PlayerState};
use crate::effects::EffectResolver;
use crate::zones::Slot;

use super::Policy;

type Order = SmallVec<[Slot; RESOLUTIONS_PER_ROOM]>;

/// Best-order player.
///
/// Prefers, in order: surviving the room, ending with more health, holding
/// the stronger weapon, and leaving something other than a monster to carry.
/// Defers a room whose best plan kills or costs at least half the current
/// health, when deferring is allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

#[derive(Clone, Debug)]
struct Plan {
    order: Order,
    player: PlayerState,
    safe_carry: bool,
}

impl Plan {
    fn score(&self) -> (bool, i32, u8, bool) {
        (
            self.player.is_alive(),
            self.player.health(),
            self.player.weapon().map_or(0, |w| w.rank().value()),
            self.safe_carry,
        )
    }
}

impl GreedyPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn best_plan(state: &GameState) -> Option<Plan> {
        let resolution = state.resolution()?;
        let cards: SmallVec<[(Slot, Card); 4]> = resolution.unresolved().collect();

        let mut best = None;
        search(&cards, resolution.remaining(), state.player().clone(), &mut Order::new(), &mut best);
        best
    }

    fn should_defer(state: &GameState) -> bool {
        let Some(plan) = Self::best_plan(state) else {
            return false;
        };
        let health = state.player().health();
        let lost = health - plan.player.health();

        let defer = !plan.player.is_alive() || lost * 2 >= health;
        tracing::debug!(health, lost, defer, "greedy deferral check");
        defer
    }
}

fn search(cards: &[(Slot, Card)], picks: usize, player: PlayerState, order: &mut Order, best: &mut Option<Plan>) {
    if order.len() == picks || !player.is_alive() {
        let safe_carry = cards
            .iter()
            .filter(|(slot, _)| !order.contains(slot))
            .all(|(_, card)| !card.is_monster());
        let plan = Plan {
            order: order.clone(),
            player,
            safe_carry,
        };
        if best.as_ref().map_or(true, |b| plan.score() > b.score()) {
            *best = Some(plan);
        }
        return;
    }

    for &(slot, card) in cards {
        if order.contains(&slot) {
            continue;
        }
        let mut next = player.clone();
        EffectResolver::resolve(&mut next, card);
        order.push(slot);
        search(cards, picks, next, order, best);
        order.pop();
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Option<Action> {
        if legal.contains(&Action::Defer) {
            return Some(if Self::should_defer(state) {
                Action::Defer
            } else {
                Action::Face
            });
        }

        let planned = Self::best_plan(state)
            .and_then(|plan| plan.order.first().copied())
            .map(Action::Resolve)
            .filter(|action| legal.contains(action));
        planned.or_else(|| legal.first().copied())
    }
}
