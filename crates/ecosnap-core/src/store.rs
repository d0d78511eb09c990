use uuid::Uuid;

use ecosnap_domain::{CurrencyTriple, LoggedItem, PurchaseRecord, UserBalance};

use crate::CoreError;

/// Abstraction over persistence backends holding user balances, logged
/// items, and purchases.
///
/// The store is the sole synchronization point for balance mutation:
/// services never decrement a cached balance optimistically. Every commit
/// returns the authoritative post-commit balance, which callers adopt
/// before allowing another purchase from the same session.
pub trait RewardStore: Send + Sync {
    /// Fetches the current balance snapshot for a user.
    fn fetch_balance(&self, user_id: Uuid) -> Result<UserBalance, CoreError>;

    /// Atomically inserts the item records, credits the earned currency,
    /// and bumps the items-logged counter by `items.len()`, as one
    /// transaction: either everything lands or nothing does.
    ///
    /// Idempotent resubmission is not guaranteed; retrying a batch whose
    /// outcome is unknown may double-log.
    fn commit_item_batch(
        &self,
        user_id: Uuid,
        items: &[LoggedItem],
        earned: CurrencyTriple,
    ) -> Result<UserBalance, CoreError>;

    /// Atomically debits `purchase.cost` and records the purchase,
    /// rejecting the commit if any balance would go negative. The cost is
    /// already final (boost-applied, floored); the store never re-derives
    /// pricing.
    fn commit_purchase(
        &self,
        user_id: Uuid,
        purchase: &PurchaseRecord,
    ) -> Result<UserBalance, CoreError>;

    /// Returns every logged item for the user, oldest first.
    fn logged_items(&self, user_id: Uuid) -> Result<Vec<LoggedItem>, CoreError>;

    /// Returns every purchase for the user, oldest first.
    fn purchases(&self, user_id: Uuid) -> Result<Vec<PurchaseRecord>, CoreError>;
}
