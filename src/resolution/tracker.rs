//! Per-room resolution bookkeeping.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::RESOLUTIONS_PER_ROOM;
use crate::core::PlayerState;
use crate::effects::{Effect, EffectResolver};
use crate::error::ActionError;
use crate::zones::{Room, Slot};

/// A faced room and the slots resolved so far, in pick order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResolution {
    room: Room,
    resolved: SmallVec<[Slot; RESOLUTIONS_PER_ROOM]>,
}

impl RoomResolution {
    #[must_use]
    pub fn new(room: Room) -> Self {
        Self {
            room,
            resolved: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Number of cards that must be resolved in this room.
    #[must_use]
    pub fn required(&self) -> usize {
        self.room.len().min(RESOLUTIONS_PER_ROOM)
    }

    /// Slots resolved so far, in the order they were picked.
    #[must_use]
    pub fn resolved(&self) -> &[Slot] {
        &self.resolved
    }

    #[must_use]
    pub fn is_resolved(&self, slot: Slot) -> bool {
        self.resolved.contains(&slot)
    }

    /// Resolutions still owed before the room is done.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.required().saturating_sub(self.resolved.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Cards not yet resolved, with their slots.
    pub fn unresolved(&self) -> impl Iterator<Item = (Slot, Card)> + '_ {
        self.room.slots().filter(|(slot, _)| !self.is_resolved(*slot))
    }

    /// Validate a 1-based position typed by the player.
    pub fn validate(&self, position: usize) -> Result<Slot, ActionError> {
        let slot = Slot::from_position(position)
            .filter(|slot| slot.index() < self.room.len())
            .ok_or(ActionError::InvalidSelection {
                position,
                room_size: self.room.len(),
            })?;
        self.check(slot)?;
        Ok(slot)
    }

    /// Check that `slot` holds a card that has not been resolved yet.
    pub fn check(&self, slot: Slot) -> Result<Card, ActionError> {
        let card = self.room.get(slot).ok_or(ActionError::InvalidSelection {
            position: slot.position(),
            room_size: self.room.len(),
        })?;
        if self.is_resolved(slot) {
            return Err(ActionError::DuplicateSelection {
                position: slot.position(),
            });
        }
        Ok(card)
    }

    /// Resolve the card in `slot` against the player.
    ///
    /// On error nothing changes: neither the room nor the player.
    pub fn resolve(&mut self, slot: Slot, player: &mut PlayerState) -> Result<Effect, ActionError> {
        if self.is_complete() {
            return Err(ActionError::RoomComplete);
        }
        let card = self.check(slot)?;
        self.resolved.push(slot);
        Ok(EffectResolver::resolve(player, card))
    }

    /// The card carried into the next room, once this one is complete.
    ///
    /// Only a full room leaves a card behind; shorter rooms carry nothing.
    #[must_use]
    pub fn carry(&self) -> Option<Card> {
        if !self.is_complete() {
            return None;
        }
        let mut left = self.unresolved();
        let carry = left.next().map(|(_, card)| card);
        debug_assert!(left.next().is_none(), "more than one card left in a complete room");
        carry
    }

    /// Give the room back, for returning a deferred room to the deck.
    #[must_use]
    pub fn into_room(self) -> Room {
        self.room
    }
}
