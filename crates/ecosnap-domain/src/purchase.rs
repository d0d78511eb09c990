//! Purchase records committed alongside balance debits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyTriple;

/// What was purchased. Offsets record the boosted yield; coupons record the
/// generated redemption code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PurchaseKind {
    Offset {
        project_title: String,
        amount_tons: f64,
    },
    Coupon {
        business: String,
        title: String,
        code: String,
    },
}

/// One committed purchase. The cost is final: boost-applied and floored by
/// the pricing layer, so the store never re-derives pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: PurchaseKind,
    pub cost: CurrencyTriple,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseRecord {
    pub fn offset(
        user_id: Uuid,
        project_title: impl Into<String>,
        amount_tons: f64,
        cost: CurrencyTriple,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind: PurchaseKind::Offset {
                project_title: project_title.into(),
                amount_tons,
            },
            cost,
            purchased_at,
        }
    }

    pub fn coupon(
        user_id: Uuid,
        business: impl Into<String>,
        title: impl Into<String>,
        code: impl Into<String>,
        cost: CurrencyTriple,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind: PurchaseKind::Coupon {
                business: business.into(),
                title: title.into(),
                code: code.into(),
            },
            cost,
            purchased_at,
        }
    }
}
