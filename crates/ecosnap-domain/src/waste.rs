//! Domain models for classified waste items and logged-item records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyTriple;

/// Confidence values above this threshold qualify for the award bonus.
pub const HIGH_CONFIDENCE_THRESHOLD: u8 = 90;

/// Closed set of waste categories the classifier may produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Compost,
    Plastic,
    Paper,
    Metal,
    Glass,
    Organic,
    Landfill,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 7] = [
        WasteCategory::Compost,
        WasteCategory::Plastic,
        WasteCategory::Paper,
        WasteCategory::Metal,
        WasteCategory::Glass,
        WasteCategory::Organic,
        WasteCategory::Landfill,
    ];

    /// Parses a raw classifier label, case-insensitively.
    ///
    /// Unknown labels return `None`; callers treat them as a zero
    /// contribution rather than a failure.
    pub fn parse(value: &str) -> Option<WasteCategory> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compost" => Some(WasteCategory::Compost),
            "plastic" => Some(WasteCategory::Plastic),
            "paper" => Some(WasteCategory::Paper),
            "metal" => Some(WasteCategory::Metal),
            "glass" => Some(WasteCategory::Glass),
            "organic" => Some(WasteCategory::Organic),
            "landfill" => Some(WasteCategory::Landfill),
            _ => None,
        }
    }

    /// Returns `true` for categories routed to the compost currency.
    pub fn is_compostable(self) -> bool {
        matches!(self, WasteCategory::Compost | WasteCategory::Organic)
    }

    /// Wire-format label, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            WasteCategory::Compost => "compost",
            WasteCategory::Plastic => "plastic",
            WasteCategory::Paper => "paper",
            WasteCategory::Metal => "metal",
            WasteCategory::Glass => "glass",
            WasteCategory::Organic => "organic",
            WasteCategory::Landfill => "landfill",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One waste object as identified by the external vision classifier.
///
/// Immutable once created; `category` and `recyclable` are independent
/// inputs and are both honored exactly as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedItem {
    pub name: String,
    pub category: WasteCategory,
    pub recyclable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClassifiedItem {
    pub fn new(name: impl Into<String>, category: WasteCategory, recyclable: bool) -> Self {
        Self {
            name: name.into(),
            category,
            recyclable,
            confidence: None,
            description: None,
        }
    }

    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` when the classifier reported confidence above the
    /// bonus threshold.
    pub fn is_high_confidence(&self) -> bool {
        self.confidence
            .map(|value| value > HIGH_CONFIDENCE_THRESHOLD)
            .unwrap_or(false)
    }
}

/// Persisted record of one logged item: classifier output plus the currency
/// it earned. A log entry, not itself authoritative for balances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: WasteCategory,
    pub recyclable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub earned: CurrencyTriple,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    pub logged_at: DateTime<Utc>,
}

impl LoggedItem {
    /// Builds a record from a classified item and its computed award.
    pub fn from_item(
        user_id: Uuid,
        item: &ClassifiedItem,
        earned: CurrencyTriple,
        image_data: Option<String>,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: item.name.clone(),
            category: item.category,
            recyclable: item.recyclable,
            confidence: item.confidence,
            description: item.description.clone(),
            earned,
            image_data,
            logged_at,
        }
    }
}
