mod common;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use common::{balance, FailingClassifier, FailingStore, MemoryRewardStore, StubClassifier};
use ecosnap_core::{CapturedImage, CoreError, LoggingService, RewardStore, SystemClock};
use ecosnap_domain::{ClassifiedItem, CurrencyTriple, SessionContext, WasteCategory};

fn now() -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn sample_items() -> Vec<ClassifiedItem> {
    vec![
        ClassifiedItem::new("water bottle", WasteCategory::Plastic, true).with_confidence(97),
        ClassifiedItem::new("banana peel", WasteCategory::Organic, false),
        ClassifiedItem::new("chip bag", WasteCategory::Landfill, false).with_confidence(80),
    ]
}

#[test]
fn committed_batch_updates_balance_and_history() {
    let user_id = Uuid::new_v4();
    let store = MemoryRewardStore::with_user(user_id, balance(0, 0, 0));
    let mut ctx = SessionContext::new(user_id, balance(0, 0, 0));

    let outcome =
        LoggingService::log_items(&store, &mut ctx, &sample_items(), None, now()).expect("commit");

    assert_eq!(outcome.earned, CurrencyTriple::new(12, 5, 10));
    assert_eq!(outcome.items_count, 3);
    assert_eq!(ctx.balance.recycling, 12);
    assert_eq!(ctx.balance.trash, 5);
    assert_eq!(ctx.balance.compost, 10);
    assert_eq!(ctx.balance.total_items_logged, 3);

    // 0.5 (plastic) + 0.8 (organic) - 0.1 (landfill)
    assert!((outcome.carbon_kg - 1.2).abs() < 1e-9);

    let history = store.logged_items(user_id).expect("history");
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].earned, CurrencyTriple::new(12, 0, 0));
    assert_eq!(history[0].user_id, user_id);
    assert_eq!(history[0].logged_at, now());
}

#[test]
fn empty_batch_commits_nothing() {
    let user_id = Uuid::new_v4();
    let store = MemoryRewardStore::with_user(user_id, balance(7, 0, 0));
    let mut ctx = SessionContext::new(user_id, balance(7, 0, 0));

    let outcome = LoggingService::log_items(&store, &mut ctx, &[], None, now()).expect("no-op");

    assert!(outcome.earned.is_zero());
    assert_eq!(outcome.balance.recycling, 7);
    assert!(store.logged_items(user_id).expect("history").is_empty());
    assert_eq!(store.fetch_balance(user_id).expect("balance").total_items_logged, 0);
}

#[test]
fn store_failure_means_nothing_is_granted() {
    let user_id = Uuid::new_v4();
    let mut ctx = SessionContext::new(user_id, balance(1, 2, 3));

    let err = LoggingService::log_items(&FailingStore, &mut ctx, &sample_items(), None, now())
        .expect_err("commit must fail");

    assert!(matches!(err, CoreError::Storage(_)));
    // The context snapshot is untouched; no currency was granted.
    assert_eq!(ctx.balance, balance(1, 2, 3));
}

#[test]
fn classifier_failure_surfaces_as_retryable_analysis_error() {
    let user_id = Uuid::new_v4();
    let store = MemoryRewardStore::with_user(user_id, balance(0, 0, 0));
    let mut ctx = SessionContext::new(user_id, balance(0, 0, 0));
    let image = CapturedImage::new(vec![0xFF, 0xD8], "image/jpeg");

    let err = LoggingService::analyze_and_log(
        &FailingClassifier,
        &store,
        &mut ctx,
        &image,
        &SystemClock,
    )
    .expect_err("analysis must fail");

    assert!(matches!(err, CoreError::AnalysisFailed(_)));
    assert!(store.logged_items(user_id).expect("history").is_empty());
}

#[test]
fn analyze_and_log_runs_the_full_flow() {
    let user_id = Uuid::new_v4();
    let store = MemoryRewardStore::with_user(user_id, balance(0, 0, 0));
    let mut ctx = SessionContext::new(user_id, balance(0, 0, 0));
    let classifier = StubClassifier {
        items: sample_items(),
    };
    let image = CapturedImage::new(vec![0xFF, 0xD8], "image/jpeg");

    let outcome =
        LoggingService::analyze_and_log(&classifier, &store, &mut ctx, &image, &SystemClock)
            .expect("flow succeeds");

    assert_eq!(outcome.items_count, 3);
    assert_eq!(store.fetch_balance(user_id).expect("balance"), ctx.balance);
}
