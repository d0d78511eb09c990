//! Currency primitives: the three-way reward balance and its deltas.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// The three reward currencies earned by logging waste.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    Recycling,
    Trash,
    Compost,
}

impl CurrencyKind {
    pub const ALL: [CurrencyKind; 3] = [
        CurrencyKind::Recycling,
        CurrencyKind::Trash,
        CurrencyKind::Compost,
    ];
}

impl fmt::Display for CurrencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CurrencyKind::Recycling => "recycling",
            CurrencyKind::Trash => "trash",
            CurrencyKind::Compost => "compost",
        };
        f.write_str(label)
    }
}

/// A non-negative amount in each of the three currencies.
///
/// Represents either an earned amount or a cost; all fields are >= 0 at
/// rest by construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyTriple {
    pub recycling: u32,
    pub trash: u32,
    pub compost: u32,
}

impl CurrencyTriple {
    pub const ZERO: CurrencyTriple = CurrencyTriple {
        recycling: 0,
        trash: 0,
        compost: 0,
    };

    pub fn new(recycling: u32, trash: u32, compost: u32) -> Self {
        Self {
            recycling,
            trash,
            compost,
        }
    }

    /// Builds a triple carrying `amount` in a single currency.
    pub fn single(kind: CurrencyKind, amount: u32) -> Self {
        let mut triple = Self::ZERO;
        triple.set(kind, amount);
        triple
    }

    pub fn get(&self, kind: CurrencyKind) -> u32 {
        match kind {
            CurrencyKind::Recycling => self.recycling,
            CurrencyKind::Trash => self.trash,
            CurrencyKind::Compost => self.compost,
        }
    }

    pub fn set(&mut self, kind: CurrencyKind, amount: u32) {
        match kind {
            CurrencyKind::Recycling => self.recycling = amount,
            CurrencyKind::Trash => self.trash = amount,
            CurrencyKind::Compost => self.compost = amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Component-wise comparison: `true` when every field of `self` covers
    /// the corresponding field of `cost`.
    pub fn covers(&self, cost: &CurrencyTriple) -> bool {
        self.recycling >= cost.recycling
            && self.trash >= cost.trash
            && self.compost >= cost.compost
    }
}

impl Add for CurrencyTriple {
    type Output = CurrencyTriple;

    fn add(self, other: CurrencyTriple) -> CurrencyTriple {
        CurrencyTriple {
            recycling: self.recycling + other.recycling,
            trash: self.trash + other.trash,
            compost: self.compost + other.compost,
        }
    }
}

impl AddAssign for CurrencyTriple {
    fn add_assign(&mut self, other: CurrencyTriple) {
        *self = *self + other;
    }
}

impl fmt::Display for CurrencyTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recycling {} / trash {} / compost {}",
            self.recycling, self.trash, self.compost
        )
    }
}

/// Signed counterpart of [`CurrencyTriple`], used for atomic balance
/// mutations delegated to the store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyDelta {
    pub recycling: i64,
    pub trash: i64,
    pub compost: i64,
}

impl CurrencyDelta {
    /// A positive delta crediting the given amounts.
    pub fn earn(amount: CurrencyTriple) -> Self {
        Self {
            recycling: i64::from(amount.recycling),
            trash: i64::from(amount.trash),
            compost: i64::from(amount.compost),
        }
    }

    /// A negative delta debiting the given amounts.
    pub fn spend(amount: CurrencyTriple) -> Self {
        Self {
            recycling: -i64::from(amount.recycling),
            trash: -i64::from(amount.trash),
            compost: -i64::from(amount.compost),
        }
    }
}

/// Snapshot of a user's stored balances.
///
/// Owned by the external store; services only compute deltas and
/// affordability against it and adopt the store's authoritative result
/// after each commit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserBalance {
    pub recycling: u32,
    pub trash: u32,
    pub compost: u32,
    pub total_items_logged: u32,
}

impl UserBalance {
    pub fn triple(&self) -> CurrencyTriple {
        CurrencyTriple::new(self.recycling, self.trash, self.compost)
    }

    pub fn get(&self, kind: CurrencyKind) -> u32 {
        self.triple().get(kind)
    }

    /// Returns `true` when every currency independently covers the cost;
    /// a surplus in one currency never offsets a deficit in another.
    pub fn covers(&self, cost: &CurrencyTriple) -> bool {
        self.triple().covers(cost)
    }

    /// Reports the first currency that falls short of `cost`, with the
    /// required and available amounts.
    pub fn first_deficit(&self, cost: &CurrencyTriple) -> Option<(CurrencyKind, u32, u32)> {
        CurrencyKind::ALL.into_iter().find_map(|kind| {
            let required = cost.get(kind);
            let available = self.get(kind);
            (available < required).then_some((kind, required, available))
        })
    }

    /// Applies a signed delta plus an items-logged increment, rejecting any
    /// result that would drive a balance negative.
    pub fn checked_apply(&self, delta: &CurrencyDelta, items_logged: u32) -> Option<UserBalance> {
        let recycling = i64::from(self.recycling) + delta.recycling;
        let trash = i64::from(self.trash) + delta.trash;
        let compost = i64::from(self.compost) + delta.compost;
        if recycling < 0 || trash < 0 || compost < 0 {
            return None;
        }
        Some(UserBalance {
            recycling: u32::try_from(recycling).ok()?,
            trash: u32::try_from(trash).ok()?,
            compost: u32::try_from(compost).ok()?,
            total_items_logged: self.total_items_logged.checked_add(items_logged)?,
        })
    }
}
