//! Effect definitions.
//!
//! An `Effect` is the outcome of resolving one card. The engine reports it
//! in a `GameEvent::Resolved`, and presentation code renders it.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// What resolving a card did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A weapon was equipped, possibly replacing another.
    Equipped {
        weapon: Card,
        replaced: Option<Card>,
    },

    /// A potion was drunk. `healed` is what was actually restored.
    Healed {
        potion: Card,
        healed: i32,
    },

    /// The equipped weapon beat the monster. No damage taken.
    Slain {
        monster: Card,
        weapon: Card,
    },

    /// The player fought without a strong enough weapon.
    /// `weapon` is the equipped weapon that was too weak, if any.
    Struck {
        monster: Card,
        weapon: Option<Card>,
        damage: i32,
    },
}

impl Effect {
    /// Health change caused by this effect.
    #[must_use]
    pub fn health_delta(&self) -> i32 {
        match *self {
            Effect::Healed { healed, .. } => healed,
            Effect::Struck { damage, .. } => -damage,
            Effect::Equipped { .. } | Effect::Slain { .. } => 0,
        }
    }

    /// The card that was resolved.
    #[must_use]
    pub fn card(&self) -> Card {
        match *self {
            Effect::Equipped { weapon, .. } => weapon,
            Effect::Healed { potion, .. } => potion,
            Effect::Slain { monster, .. } | Effect::Struck { monster, .. } => monster,
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Effect::Equipped { weapon, .. } => {
                write!(f, "You equipped a weapon: {} (Attack: {})", weapon, weapon.rank().value())
            }
            Effect::Healed { healed, .. } => {
                write!(f, "You drank a potion! Restored {} HP.", healed)
            }
            Effect::Slain { monster, weapon } => {
                write!(f, "You attacked {} with {} and won!", monster, weapon)
            }
            Effect::Struck { monster, weapon: Some(weapon), damage } => {
                write!(
                    f,
                    "Your {} is too weak against {}! You fight barehanded and take {} damage.",
                    weapon, monster, damage
                )
            }
            Effect::Struck { monster, weapon: None, damage } => {
                write!(f, "You fight {} barehanded and take {} damage.", monster, damage)
            }
        }
    }
}
