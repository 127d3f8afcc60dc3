//! Player state: health and the equipped weapon.
//!
//! Health starts at [`MAX_HEALTH`] and potions never push it above that.
//! Damage has no floor; health at or below zero means the player is dead.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

use super::config::MAX_HEALTH;

/// The single player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    health: i32,
    weapon: Option<Card>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// Full health, no weapon.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            health: MAX_HEALTH,
            weapon: None,
        }
    }

    /// Start at the given health, clamped to [`MAX_HEALTH`].
    #[must_use]
    pub fn with_health(health: i32) -> Self {
        Self {
            health: health.min(MAX_HEALTH),
            weapon: None,
        }
    }

    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub const fn weapon(&self) -> Option<Card> {
        self.weapon
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Heal by up to `amount`, stopping at [`MAX_HEALTH`].
    ///
    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(MAX_HEALTH - self.health).max(0);
        self.health += healed;
        healed
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Equip a weapon, returning the one it replaced.
    pub fn equip(&mut self, weapon: Card) -> Option<Card> {
        self.weapon.replace(weapon)
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Health: {}", self.health)?;
        match self.weapon {
            Some(weapon) => write!(f, ", Weapon: {} (Attack: {})", weapon, weapon.rank().value()),
            None => write!(f, ", Weapon: None"),
        }
    }
}
