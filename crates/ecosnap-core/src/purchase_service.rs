//! Purchase orchestration: price, gate on affordability, commit.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, warn};

use ecosnap_domain::{
    Coupon, OffsetProject, PurchaseRecord, SessionContext, UserBalance,
};

use crate::{pricing_service::PricingService, pricing_service::Quote, store::RewardStore, CoreError};

const COUPON_CODE_LEN: usize = 8;
const COUPON_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Result of a committed purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOutcome {
    pub record: PurchaseRecord,
    pub quote: Quote,
    /// Authoritative balance after the commit.
    pub balance: UserBalance,
}

/// Orchestrates marketplace purchases over the store seam.
pub struct PurchaseService;

impl PurchaseService {
    /// Purchases an offset project at the boost-adjusted price.
    ///
    /// Insufficient funds reject locally before any write; the store then
    /// debits and records in one atomic call, and the context adopts the
    /// returned balance before any further purchase.
    pub fn purchase_offset(
        store: &dyn RewardStore,
        ctx: &mut SessionContext,
        project: &OffsetProject,
        now: DateTime<Utc>,
    ) -> Result<PurchaseOutcome, CoreError> {
        let quote = PricingService::price_project(project, ctx.active_boost(now), now);
        Self::ensure_affordable(ctx, &quote)?;

        let amount_tons = quote.yield_tons.unwrap_or(project.offset_tons);
        let record =
            PurchaseRecord::offset(ctx.user_id, project.title.clone(), amount_tons, quote.cost, now);
        Self::commit(store, ctx, record, quote)
    }

    /// Redeems a coupon at the boost-adjusted price, generating the
    /// redemption code.
    pub fn redeem_coupon<R: Rng + ?Sized>(
        store: &dyn RewardStore,
        ctx: &mut SessionContext,
        rng: &mut R,
        coupon: &Coupon,
        now: DateTime<Utc>,
    ) -> Result<PurchaseOutcome, CoreError> {
        let quote = PricingService::price_coupon(coupon, ctx.active_boost(now), now);
        Self::ensure_affordable(ctx, &quote)?;

        let record = PurchaseRecord::coupon(
            ctx.user_id,
            coupon.business.clone(),
            coupon.title.clone(),
            coupon_code(rng),
            quote.cost,
            now,
        );
        Self::commit(store, ctx, record, quote)
    }

    fn ensure_affordable(ctx: &SessionContext, quote: &Quote) -> Result<(), CoreError> {
        match ctx.balance.first_deficit(&quote.cost) {
            Some((kind, required, available)) => {
                warn!(user = %ctx.user_id, %kind, required, available, "purchase rejected");
                Err(CoreError::InsufficientFunds {
                    kind,
                    required,
                    available,
                })
            }
            None => Ok(()),
        }
    }

    fn commit(
        store: &dyn RewardStore,
        ctx: &mut SessionContext,
        record: PurchaseRecord,
        quote: Quote,
    ) -> Result<PurchaseOutcome, CoreError> {
        let balance = store.commit_purchase(ctx.user_id, &record)?;
        ctx.refresh_balance(balance);
        info!(user = %ctx.user_id, cost = %record.cost, "purchase committed");
        Ok(PurchaseOutcome {
            record,
            quote,
            balance,
        })
    }
}

/// Generates an 8-character uppercase alphanumeric redemption code.
fn coupon_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..COUPON_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..COUPON_CODE_CHARSET.len());
            COUPON_CODE_CHARSET[idx] as char
        })
        .collect()
}
