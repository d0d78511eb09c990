//! Read-only catalog of purchasable offset projects and merchant coupons.

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyTriple;

/// A verified carbon-offset project purchasable with reward currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OffsetProject {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Tons of CO2 offset per purchase, before any boost multiplier.
    pub offset_tons: f64,
    pub cost: CurrencyTriple,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// A merchant coupon purchasable with reward currency. Coupons carry no
/// CO2 yield.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub title: String,
    pub business: String,
    pub category: String,
    pub cost: CurrencyTriple,
}

/// Static catalog of everything the marketplace offers. Externally defined
/// and read-only to the reward engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<OffsetProject>,
    #[serde(default)]
    pub coupons: Vec<Coupon>,
}

impl Catalog {
    pub fn project(&self, id: &str) -> Option<&OffsetProject> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn coupon(&self, id: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|coupon| coupon.id == id)
    }

    /// The built-in catalog shipped with the application.
    pub fn builtin() -> Catalog {
        Catalog {
            projects: vec![
                OffsetProject {
                    id: "brazil-reforestation".into(),
                    title: "Plant Reforestation in the Brazilian Forest".into(),
                    location: "Brazil".into(),
                    offset_tons: 1.0,
                    cost: CurrencyTriple::new(5, 0, 0),
                    badge: Some("Germany Awards".into()),
                },
                OffsetProject {
                    id: "morocco-solar".into(),
                    title: "Solar Energy Farm in Morocco".into(),
                    location: "Morocco".into(),
                    offset_tons: 0.8,
                    cost: CurrencyTriple::new(0, 2, 0),
                    badge: None,
                },
                OffsetProject {
                    id: "denmark-wind".into(),
                    title: "Wind Power Initiative".into(),
                    location: "Denmark".into(),
                    offset_tons: 1.2,
                    cost: CurrencyTriple::new(4, 2, 0),
                    badge: None,
                },
            ],
            coupons: vec![
                Coupon {
                    id: "starbucks-5".into(),
                    title: "$5 Gift Card".into(),
                    business: "Starbucks".into(),
                    category: "Food & Drink".into(),
                    cost: CurrencyTriple::new(5, 0, 0),
                },
                Coupon {
                    id: "patagonia-20".into(),
                    title: "20% Off Voucher".into(),
                    business: "Patagonia".into(),
                    category: "Outdoor & Apparel".into(),
                    cost: CurrencyTriple::new(10, 0, 0),
                },
                Coupon {
                    id: "wholefoods-10".into(),
                    title: "$10 Grocery Credit".into(),
                    business: "Whole Foods".into(),
                    category: "Groceries".into(),
                    cost: CurrencyTriple::new(8, 0, 2),
                },
                Coupon {
                    id: "ikea-15".into(),
                    title: "$15 Store Credit".into(),
                    business: "IKEA".into(),
                    category: "Home Goods".into(),
                    cost: CurrencyTriple::new(6, 2, 0),
                },
            ],
        }
    }
}
