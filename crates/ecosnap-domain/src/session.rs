//! Explicit per-session context threaded through service calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::boost::Boost;
use crate::currency::UserBalance;

/// Snapshot of the calling user's session: identity, last known balance,
/// and any boost granted by the mini-game.
///
/// Passed explicitly rather than read from ambient state so pricing and
/// currency functions stay pure and testable. The balance is a snapshot;
/// services refresh it from the store's authoritative result after every
/// commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionContext {
    pub user_id: Uuid,
    pub balance: UserBalance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    boost: Option<Boost>,
}

impl SessionContext {
    pub fn new(user_id: Uuid, balance: UserBalance) -> Self {
        Self {
            user_id,
            balance,
            boost: None,
        }
    }

    /// Returns the boost only while it is still active; expiry is
    /// re-checked on every read and the verdict is never cached.
    pub fn active_boost(&self, now: DateTime<Utc>) -> Option<&Boost> {
        self.boost.as_ref().filter(|boost| boost.is_active(now))
    }

    /// Replaces any existing boost wholesale; boosts are never merged.
    pub fn grant_boost(&mut self, boost: Boost) {
        self.boost = Some(boost);
    }

    /// Discards the boost, e.g. after a post-capture acknowledgement or at
    /// the start of a fresh game session.
    pub fn clear_boost(&mut self) {
        self.boost = None;
    }

    /// Adopts the authoritative balance returned by a store commit.
    pub fn refresh_balance(&mut self, balance: UserBalance) {
        self.balance = balance;
    }
}
