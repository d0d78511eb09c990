//! Time-boxed reward boosts granted by the mini-game.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed discount + impact-multiplier bundle.
///
/// Client-session state only: derived, ephemeral, never persisted
/// server-side. Immutable once created and replaced wholesale by a newer
/// boost. "Active" is a computed predicate re-checked on every read, not a
/// stored state transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Boost {
    /// Fraction taken off purchase costs, in `[0, 1)`.
    pub discount: f64,
    /// Factor applied to offset yields, `>= 1`.
    pub multiplier: f64,
    pub expires_at: DateTime<Utc>,
}

impl Boost {
    pub fn new(discount: f64, multiplier: f64, expires_at: DateTime<Utc>) -> Self {
        debug_assert!((0.0..1.0).contains(&discount));
        debug_assert!(multiplier >= 1.0);
        Self {
            discount,
            multiplier,
            expires_at,
        }
    }

    /// Returns `true` while the boost has not yet expired.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Time left before expiry, floored at zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}% off, {:.1}x impact",
            self.discount * 100.0,
            self.multiplier
        )
    }
}
