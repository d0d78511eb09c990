use ecosnap_core::CurrencyService;
use ecosnap_domain::{ClassifiedItem, CurrencyKind, CurrencyTriple, WasteCategory};

#[test]
fn high_confidence_compost_earns_base_plus_bonus() {
    let item = ClassifiedItem::new("apple core", WasteCategory::Compost, false).with_confidence(95);
    assert_eq!(
        CurrencyService::currency_for_item(&item),
        CurrencyTriple::new(0, 0, 12)
    );
}

#[test]
fn recyclable_landfill_item_is_classified_by_recyclability() {
    let item =
        ClassifiedItem::new("foil pouch", WasteCategory::Landfill, true).with_confidence(50);
    assert_eq!(
        CurrencyService::currency_for_item(&item),
        CurrencyTriple::new(10, 0, 0)
    );
}

#[test]
fn non_recyclable_paper_earns_trash() {
    let item = ClassifiedItem::new("greasy napkin", WasteCategory::Paper, false);
    assert_eq!(
        CurrencyService::currency_for_item(&item),
        CurrencyTriple::new(0, 5, 0)
    );
}

#[test]
fn organic_routes_to_compost_like_compost_does() {
    let item = ClassifiedItem::new("garden trimmings", WasteCategory::Organic, false);
    let award = CurrencyService::award_for_item(&item);
    assert_eq!(award.kind, CurrencyKind::Compost);
    assert_eq!(award.amount, 10);
}

#[test]
fn batch_sums_each_field_and_counts_items() {
    let items = vec![
        ClassifiedItem::new("bottle", WasteCategory::Plastic, true),
        ClassifiedItem::new("can", WasteCategory::Metal, true),
        ClassifiedItem::new("jar", WasteCategory::Glass, true),
    ];
    let batch = CurrencyService::award_batch(&items);
    assert_eq!(batch.totals, CurrencyTriple::new(30, 0, 0));
    assert_eq!(batch.items_count(), 3);
    assert_eq!(batch.per_item.len(), 3);
}

#[test]
fn empty_batch_sums_to_zero() {
    let batch = CurrencyService::award_batch(&[]);
    assert!(batch.totals.is_zero());
    assert_eq!(batch.items_count(), 0);
}

#[test]
fn mixed_batch_keeps_currencies_independent() {
    let items = vec![
        ClassifiedItem::new("banana peel", WasteCategory::Organic, false).with_confidence(99),
        ClassifiedItem::new("chip bag", WasteCategory::Plastic, false),
        ClassifiedItem::new("newspaper", WasteCategory::Paper, true),
    ];
    let batch = CurrencyService::award_batch(&items);
    assert_eq!(batch.totals, CurrencyTriple::new(10, 5, 12));
}
