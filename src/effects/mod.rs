//! Card effects and the combat resolver.
//!
//! - `Effect`: what resolving one card did to the player
//! - `EffectResolver`: applies a card to player state by its category
//!
//! ## Rules
//!
//! - Weapons replace the equipped weapon, whatever its rank.
//! - Potions heal by their rank, capped at max health.
//! - Monsters are slain for free only when the equipped weapon's rank is
//!   strictly higher. Otherwise the player takes the monster's full rank as
//!   damage. Weapons are never used up.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::EffectResolver;
