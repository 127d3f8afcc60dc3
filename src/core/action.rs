//! Player decisions.
//!
//! Every decision the engine asks for is an `Action`:
//! - "Defer" / "Face" when a room is offered for deferral
//! - "Resolve card N" while working through a room
//!
//! Accepted actions are kept as `ActionRecord`s so a game can be replayed
//! from its seed and history.

use serde::{Deserialize, Serialize};

use crate::zones::Slot;

/// A player decision.
///
/// ## Example
///
/// ```
/// use rust_scoundrel::core::Action;
/// use rust_scoundrel::zones::Slot;
///
/// let pick = Action::Resolve(Slot::new(0));
/// assert_eq!(pick.to_string(), "resolve card 1");
/// assert_eq!(Action::Defer.name(), "defer");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Send the whole room back into the deck.
    Defer,
    /// Decline to defer and start resolving the room.
    Face,
    /// Resolve the card in this slot.
    Resolve(Slot),
}

impl Action {
    /// Short name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Defer => "defer",
            Action::Face => "face",
            Action::Resolve(_) => "resolve",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Defer => f.write_str("defer the room"),
            Action::Face => f.write_str("face the room"),
            Action::Resolve(slot) => write!(f, "resolve card {}", slot),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Checking determinism in tests
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Room number the action was taken in (starts at 1).
    pub room: u32,

    /// The action taken.
    pub action: Action,

    /// Position in the whole game's history (starts at 0).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(room: u32, action: Action, sequence: u32) -> Self {
        Self {
            room,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Defer.to_string(), "defer the room");
        assert_eq!(Action::Face.to_string(), "face the room");
        assert_eq!(Action::Resolve(Slot::new(3)).to_string(), "resolve card 4");
    }

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Resolve(Slot::new(1)), Action::Resolve(Slot::new(1)));
        assert_ne!(Action::Resolve(Slot::new(1)), Action::Resolve(Slot::new(2)));
        assert_ne!(Action::Defer, Action::Face);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(2, Action::Resolve(Slot::new(0)), 5);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
