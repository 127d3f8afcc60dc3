//! Deferral policy: how many rooms may be skipped in a row.

use serde::{Deserialize, Serialize};

use crate::core::config::MAX_DEFERRED;
use crate::error::ActionError;

/// Tracks consecutive deferrals against [`MAX_DEFERRED`].
///
/// ```
/// use rust_scoundrel::rules::DeferralPolicy;
///
/// let mut policy = DeferralPolicy::new();
/// policy.on_defer().unwrap();
/// policy.on_defer().unwrap();
/// assert!(!policy.may_defer());
/// assert!(policy.on_defer().is_err());
///
/// policy.on_room_resolved();
/// assert!(policy.may_defer());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferralPolicy {
    deferred: u8,
}

impl DeferralPolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self { deferred: 0 }
    }

    /// Rooms deferred since the last resolved room.
    #[must_use]
    pub const fn deferred(&self) -> u8 {
        self.deferred
    }

    /// Whether the current room may be deferred.
    #[must_use]
    pub const fn may_defer(&self) -> bool {
        self.deferred < MAX_DEFERRED
    }

    /// Count a deferral. Rejected once the cap is reached.
    pub fn on_defer(&mut self) -> Result<(), ActionError> {
        if !self.may_defer() {
            return Err(ActionError::DeferralUnavailable {
                deferred: self.deferred,
            });
        }
        self.deferred += 1;
        Ok(())
    }

    /// A room was resolved: the full deferral budget comes back.
    pub fn on_room_resolved(&mut self) {
        self.deferred = 0;
    }
}
