//! Currency rules: converting classified items into earned currency.

use ecosnap_domain::{ClassifiedItem, CurrencyKind, CurrencyTriple};

/// Base award for compostable items.
pub const COMPOST_AWARD: u32 = 10;
/// Base award for recyclable items.
pub const RECYCLING_AWARD: u32 = 10;
/// Base award for everything else.
pub const TRASH_AWARD: u32 = 5;
/// Bonus added to the awarded currency when confidence exceeds the
/// high-confidence threshold.
pub const HIGH_CONFIDENCE_BONUS: u32 = 2;

/// The currency one item earned. The awarded kind is explicit so callers
/// never have to infer it by inspecting which field is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAward {
    pub kind: CurrencyKind,
    pub amount: u32,
}

impl ItemAward {
    pub fn triple(&self) -> CurrencyTriple {
        CurrencyTriple::single(self.kind, self.amount)
    }
}

/// Awards for a whole batch of classified items, plus their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchAward {
    pub per_item: Vec<ItemAward>,
    pub totals: CurrencyTriple,
}

impl BatchAward {
    /// Number of items in the batch, forwarded to the store's items-logged
    /// increment.
    pub fn items_count(&self) -> u32 {
        self.per_item.len() as u32
    }
}

/// Stateless rules mapping classified items to earned currency.
pub struct CurrencyService;

impl CurrencyService {
    /// Computes the award for one item.
    ///
    /// Precedence: compost/organic categories earn compost; otherwise the
    /// recyclable flag earns recycling, regardless of category (a landfill
    /// item marked recyclable is classified by recyclability); everything
    /// else earns trash. High confidence (> 90) adds a bonus to whichever
    /// currency the branch awarded.
    pub fn award_for_item(item: &ClassifiedItem) -> ItemAward {
        let (kind, base) = if item.category.is_compostable() {
            (CurrencyKind::Compost, COMPOST_AWARD)
        } else if item.recyclable {
            (CurrencyKind::Recycling, RECYCLING_AWARD)
        } else {
            (CurrencyKind::Trash, TRASH_AWARD)
        };

        let amount = if item.is_high_confidence() {
            base + HIGH_CONFIDENCE_BONUS
        } else {
            base
        };

        ItemAward { kind, amount }
    }

    /// Convenience wrapper returning the award as a triple.
    pub fn currency_for_item(item: &ClassifiedItem) -> CurrencyTriple {
        Self::award_for_item(item).triple()
    }

    /// Pure aggregation over a batch; the eventual balance commit is the
    /// store's concern.
    pub fn award_batch(items: &[ClassifiedItem]) -> BatchAward {
        let per_item: Vec<ItemAward> = items.iter().map(Self::award_for_item).collect();
        let totals = per_item
            .iter()
            .fold(CurrencyTriple::ZERO, |acc, award| acc + award.triple());
        BatchAward { per_item, totals }
    }
}
