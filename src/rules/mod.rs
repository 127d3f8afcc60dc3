//! Game rules.
//!
//! - `RulesEngine`: legal actions, action application, terminal check
//! - `DeferralPolicy`: the consecutive-deferral cap
//! - `GameEvent`: what each action caused
//!
//! The concrete game lives in `games::scoundrel`.

pub mod deferral;
pub mod engine;
pub mod event;

pub use deferral::DeferralPolicy;
pub use engine::{GameResult, RulesEngine};
pub use event::GameEvent;
