//! Effect resolution: applying a resolved card to the player.

use crate::cards::{Card, Category};
use crate::core::PlayerState;

use super::Effect;

/// Applies cards to player state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one card against the player, dispatching on its category.
    pub fn resolve(player: &mut PlayerState, card: Card) -> Effect {
        match card.category() {
            Category::Weapon => Effect::Equipped {
                weapon: card,
                replaced: player.equip(card),
            },
            Category::Potion => Effect::Healed {
                potion: card,
                healed: player.heal(card.strength()),
            },
            Category::Monster => Self::fight(player, card),
        }
    }

    /// Whether `weapon` beats `monster` outright.
    ///
    /// Strictly higher rank wins; a tie goes to the monster.
    #[must_use]
    pub fn weapon_beats(weapon: Card, monster: Card) -> bool {
        monster.rank() < weapon.rank()
    }

    /// Damage the player would take fighting `monster` right now.
    #[must_use]
    pub fn damage_from(player: &PlayerState, monster: Card) -> i32 {
        match player.weapon() {
            Some(weapon) if Self::weapon_beats(weapon, monster) => 0,
            _ => monster.strength(),
        }
    }

    fn fight(player: &mut PlayerState, monster: Card) -> Effect {
        let weapon = player.weapon();
        let damage = Self::damage_from(player, monster);
        match weapon {
            Some(weapon) if damage == 0 => Effect::Slain { monster, weapon },
            _ => {
                player.take_damage(damage);
                Effect::Struck { monster, weapon, damage }
            }
        }
    }
}
