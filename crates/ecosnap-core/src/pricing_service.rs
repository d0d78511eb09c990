//! Marketplace pricing: boost application and affordability checks.

use chrono::{DateTime, Utc};

use ecosnap_domain::{Boost, Coupon, CurrencyTriple, OffsetProject, UserBalance};

/// A priced catalog entry: final cost (boost-applied, floored) and, for
/// offset projects, the boosted yield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub cost: CurrencyTriple,
    pub yield_tons: Option<f64>,
}

/// Stateless pricing rules over catalog entries and balance snapshots.
pub struct PricingService;

impl PricingService {
    /// Prices a base cost/yield pair under an optional boost.
    ///
    /// Each cost field is floored independently; partial-currency costs
    /// always round down in the user's favor. An absent or expired boost
    /// means discount 0 and multiplier 1, never an error; expiry is
    /// re-checked here on every call.
    pub fn price(
        base_cost: &CurrencyTriple,
        base_yield: Option<f64>,
        boost: Option<&Boost>,
        now: DateTime<Utc>,
    ) -> Quote {
        let active = boost.filter(|boost| boost.is_active(now));
        let discount = active.map(|boost| boost.discount).unwrap_or(0.0);
        let multiplier = active.map(|boost| boost.multiplier).unwrap_or(1.0);

        let cost = CurrencyTriple::new(
            discounted(base_cost.recycling, discount),
            discounted(base_cost.trash, discount),
            discounted(base_cost.compost, discount),
        );

        Quote {
            cost,
            yield_tons: base_yield.map(|tons| tons * multiplier),
        }
    }

    pub fn price_project(project: &OffsetProject, boost: Option<&Boost>, now: DateTime<Utc>) -> Quote {
        Self::price(&project.cost, Some(project.offset_tons), boost, now)
    }

    /// Coupons carry no yield; only the discount applies.
    pub fn price_coupon(coupon: &Coupon, boost: Option<&Boost>, now: DateTime<Utc>) -> Quote {
        Self::price(&coupon.cost, None, boost, now)
    }

    /// All three currencies must independently cover the cost; a surplus in
    /// one never offsets a deficit in another.
    pub fn can_afford(cost: &CurrencyTriple, balance: &UserBalance) -> bool {
        balance.covers(cost)
    }
}

fn discounted(base: u32, discount: f64) -> u32 {
    (f64::from(base) * (1.0 - discount)).floor() as u32
}
