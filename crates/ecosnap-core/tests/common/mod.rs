//! Shared test doubles for the collaborator seams.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use ecosnap_core::{CapturedImage, Classifier, CoreError, RewardStore};
use ecosnap_domain::{
    ClassifiedItem, CurrencyDelta, CurrencyTriple, LoggedItem, PurchaseRecord, UserBalance,
};

#[derive(Default)]
struct Journal {
    balance: UserBalance,
    items: Vec<LoggedItem>,
    purchases: Vec<PurchaseRecord>,
}

/// In-memory [`RewardStore`] mirroring the backend's atomic-commit
/// contract.
#[derive(Default)]
pub struct MemoryRewardStore {
    journals: Mutex<HashMap<Uuid, Journal>>,
}

impl MemoryRewardStore {
    pub fn with_user(user_id: Uuid, balance: UserBalance) -> Self {
        let store = Self::default();
        store.journals.lock().unwrap().insert(
            user_id,
            Journal {
                balance,
                ..Journal::default()
            },
        );
        store
    }
}

impl RewardStore for MemoryRewardStore {
    fn fetch_balance(&self, user_id: Uuid) -> Result<UserBalance, CoreError> {
        let journals = self.journals.lock().unwrap();
        journals
            .get(&user_id)
            .map(|journal| journal.balance)
            .ok_or(CoreError::UserNotFound(user_id))
    }

    fn commit_item_batch(
        &self,
        user_id: Uuid,
        items: &[LoggedItem],
        earned: CurrencyTriple,
    ) -> Result<UserBalance, CoreError> {
        let mut journals = self.journals.lock().unwrap();
        let journal = journals
            .get_mut(&user_id)
            .ok_or(CoreError::UserNotFound(user_id))?;
        let updated = journal
            .balance
            .checked_apply(&CurrencyDelta::earn(earned), items.len() as u32)
            .ok_or_else(|| CoreError::Storage("balance overflow".into()))?;
        journal.balance = updated;
        journal.items.extend_from_slice(items);
        Ok(updated)
    }

    fn commit_purchase(
        &self,
        user_id: Uuid,
        purchase: &PurchaseRecord,
    ) -> Result<UserBalance, CoreError> {
        let mut journals = self.journals.lock().unwrap();
        let journal = journals
            .get_mut(&user_id)
            .ok_or(CoreError::UserNotFound(user_id))?;
        let updated = journal
            .balance
            .checked_apply(&CurrencyDelta::spend(purchase.cost), 0)
            .ok_or_else(|| {
                let (kind, required, available) = journal
                    .balance
                    .first_deficit(&purchase.cost)
                    .expect("rejected debit has a deficit");
                CoreError::InsufficientFunds {
                    kind,
                    required,
                    available,
                }
            })?;
        journal.balance = updated;
        journal.purchases.push(purchase.clone());
        Ok(updated)
    }

    fn logged_items(&self, user_id: Uuid) -> Result<Vec<LoggedItem>, CoreError> {
        let journals = self.journals.lock().unwrap();
        journals
            .get(&user_id)
            .map(|journal| journal.items.clone())
            .ok_or(CoreError::UserNotFound(user_id))
    }

    fn purchases(&self, user_id: Uuid) -> Result<Vec<PurchaseRecord>, CoreError> {
        let journals = self.journals.lock().unwrap();
        journals
            .get(&user_id)
            .map(|journal| journal.purchases.clone())
            .ok_or(CoreError::UserNotFound(user_id))
    }
}

/// Store whose commits always fail, for not-committed semantics.
pub struct FailingStore;

impl RewardStore for FailingStore {
    fn fetch_balance(&self, user_id: Uuid) -> Result<UserBalance, CoreError> {
        Err(CoreError::UserNotFound(user_id))
    }

    fn commit_item_batch(
        &self,
        _user_id: Uuid,
        _items: &[LoggedItem],
        _earned: CurrencyTriple,
    ) -> Result<UserBalance, CoreError> {
        Err(CoreError::Storage("write failed".into()))
    }

    fn commit_purchase(
        &self,
        _user_id: Uuid,
        _purchase: &PurchaseRecord,
    ) -> Result<UserBalance, CoreError> {
        Err(CoreError::Storage("write failed".into()))
    }

    fn logged_items(&self, _user_id: Uuid) -> Result<Vec<LoggedItem>, CoreError> {
        Ok(Vec::new())
    }

    fn purchases(&self, _user_id: Uuid) -> Result<Vec<PurchaseRecord>, CoreError> {
        Ok(Vec::new())
    }
}

/// Classifier returning a fixed item list.
pub struct StubClassifier {
    pub items: Vec<ClassifiedItem>,
}

impl Classifier for StubClassifier {
    fn classify(&self, _image: &CapturedImage) -> Result<Vec<ClassifiedItem>, CoreError> {
        Ok(self.items.clone())
    }
}

/// Classifier that always fails, for the retryable-error path.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn classify(&self, _image: &CapturedImage) -> Result<Vec<ClassifiedItem>, CoreError> {
        Err(CoreError::AnalysisFailed("model unavailable".into()))
    }
}

pub fn balance(recycling: u32, trash: u32, compost: u32) -> UserBalance {
    UserBalance {
        recycling,
        trash,
        compost,
        total_items_logged: 0,
    }
}
