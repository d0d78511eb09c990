//! Item-logging orchestration: classify, award, commit.

use chrono::{DateTime, Utc};
use tracing::info;

use ecosnap_domain::{ClassifiedItem, CurrencyTriple, LoggedItem, SessionContext, UserBalance};

use crate::{
    carbon_service::CarbonService, classifier::CapturedImage, classifier::Classifier,
    currency_service::CurrencyService, currency_service::ItemAward, store::RewardStore, Clock,
    CoreError,
};

/// Result of a committed logging batch.
#[derive(Debug, Clone, PartialEq)]
pub struct LogOutcome {
    pub per_item: Vec<ItemAward>,
    pub earned: CurrencyTriple,
    pub items_count: u32,
    /// CO2 saved by the batch, in kg (landfill items subtract).
    pub carbon_kg: f64,
    /// Authoritative balance after the commit.
    pub balance: UserBalance,
}

/// Orchestrates the capture-to-commit flow over the collaborator seams.
pub struct LoggingService;

impl LoggingService {
    /// Runs the classifier and logs whatever it returns.
    ///
    /// Classifier failure is surfaced as retryable [`CoreError::AnalysisFailed`]
    /// without touching currency or balance state.
    pub fn analyze_and_log(
        classifier: &dyn Classifier,
        store: &dyn RewardStore,
        ctx: &mut SessionContext,
        image: &CapturedImage,
        clock: &dyn Clock,
    ) -> Result<LogOutcome, CoreError> {
        let items = classifier.classify(image)?;
        Self::log_items(store, ctx, &items, None, clock.now())
    }

    /// Computes awards for a classified batch and commits records plus the
    /// earned delta through one atomic store call.
    ///
    /// If the commit fails none of the computed currency is granted and the
    /// caller must not show a success state. An empty batch commits
    /// nothing.
    pub fn log_items(
        store: &dyn RewardStore,
        ctx: &mut SessionContext,
        items: &[ClassifiedItem],
        image_data: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<LogOutcome, CoreError> {
        if items.is_empty() {
            return Ok(LogOutcome {
                per_item: Vec::new(),
                earned: CurrencyTriple::ZERO,
                items_count: 0,
                carbon_kg: 0.0,
                balance: ctx.balance,
            });
        }

        let batch = CurrencyService::award_batch(items);
        let records: Vec<LoggedItem> = items
            .iter()
            .zip(&batch.per_item)
            .map(|(item, award)| {
                LoggedItem::from_item(ctx.user_id, item, award.triple(), image_data.clone(), now)
            })
            .collect();

        let balance = store.commit_item_batch(ctx.user_id, &records, batch.totals)?;
        ctx.refresh_balance(balance);

        let carbon_kg = items
            .iter()
            .map(|item| CarbonService::carbon_saved(item.category, 1))
            .sum();

        info!(
            user = %ctx.user_id,
            items = records.len(),
            earned = %batch.totals,
            "item batch committed"
        );

        Ok(LogOutcome {
            items_count: batch.items_count(),
            per_item: batch.per_item,
            earned: batch.totals,
            carbon_kg,
            balance,
        })
    }
}
