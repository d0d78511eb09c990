//! Carbon accounting: per-category CO2 estimates and savings reports.

use std::collections::HashMap;

use ecosnap_domain::{LoggedItem, WasteCategory};

/// Stateless carbon-accounting helpers.
pub struct CarbonService;

impl CarbonService {
    /// Kilograms of CO2 saved per item of the given category. Landfill
    /// items add footprint rather than save it, hence the negative entry.
    pub fn impact_per_item(category: WasteCategory) -> f64 {
        match category {
            WasteCategory::Plastic => 0.5,
            WasteCategory::Paper => 0.2,
            WasteCategory::Metal => 1.2,
            WasteCategory::Glass => 0.4,
            WasteCategory::Organic => 0.8,
            WasteCategory::Compost => 0.8,
            WasteCategory::Landfill => -0.1,
        }
    }

    /// CO2 saved for `count` items of a category, in kg. Scales linearly;
    /// rounding is a presentation concern left to callers.
    pub fn carbon_saved(category: WasteCategory, count: u32) -> f64 {
        Self::impact_per_item(category) * f64::from(count)
    }

    /// Variant accepting a raw classifier label. Unknown labels contribute
    /// zero rather than failing.
    pub fn carbon_saved_for_label(label: &str, count: u32) -> f64 {
        WasteCategory::parse(label)
            .map(|category| Self::carbon_saved(category, count))
            .unwrap_or(0.0)
    }

    pub fn kg_to_tonnes(kg: f64) -> f64 {
        kg / 1000.0
    }

    /// Formats a kg amount as tonnes with two decimals, e.g. `"0.05"`.
    pub fn format_tonnes(kg: f64) -> String {
        format!("{:.2}", Self::kg_to_tonnes(kg))
    }

    /// Aggregates logged items into a per-category savings report.
    pub fn report(items: &[LoggedItem]) -> CarbonReport {
        let mut counts: HashMap<WasteCategory, u32> = HashMap::new();
        for item in items {
            *counts.entry(item.category).or_default() += 1;
        }

        let mut total_kg = 0.0;
        let mut per_category: Vec<CategoryImpact> = counts
            .into_iter()
            .map(|(category, count)| {
                let kg = Self::carbon_saved(category, count);
                total_kg += kg;
                CategoryImpact {
                    category,
                    count,
                    kg,
                    share: 0.0,
                }
            })
            .collect();

        for entry in &mut per_category {
            entry.share = if total_kg > 0.0 {
                (entry.kg / total_kg) * 100.0
            } else {
                0.0
            };
        }
        per_category.sort_by(|a, b| {
            b.share
                .partial_cmp(&a.share)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        CarbonReport {
            top_category: per_category.first().map(|entry| entry.category),
            per_category,
            total_kg,
        }
    }
}

/// Savings attributed to a single category within a report.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryImpact {
    pub category: WasteCategory,
    pub count: u32,
    pub kg: f64,
    /// Percentage share of the total, zero when the total is non-positive.
    pub share: f64,
}

/// Per-category breakdown of avoided emissions across a user's history.
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonReport {
    pub per_category: Vec<CategoryImpact>,
    pub total_kg: f64,
    pub top_category: Option<WasteCategory>,
}
