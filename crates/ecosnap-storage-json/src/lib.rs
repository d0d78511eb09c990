//! Filesystem-backed JSON persistence for user reward journals.
//!
//! One journal file per user holds the balance, the logged-item history,
//! and the purchase history. Every commit rewrites the journal through a
//! temporary file and rename, so the two halves of an operation (records
//! and balance delta) land in one transaction: the file on disk is always
//! either the old state or the new state.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecosnap_core::{CoreError, RewardStore};
use ecosnap_domain::{
    Catalog, CurrencyDelta, CurrencyTriple, LoggedItem, PurchaseRecord, UserBalance,
};

const JOURNAL_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Everything the backend stores for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserJournal {
    user_id: Uuid,
    balance: UserBalance,
    #[serde(default)]
    items: Vec<LoggedItem>,
    #[serde(default)]
    purchases: Vec<PurchaseRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserJournal {
    fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            balance: UserBalance::default(),
            items: Vec::new(),
            purchases: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Filesystem-backed [`RewardStore`] with one JSON journal per user.
pub struct JsonRewardStore {
    users_dir: PathBuf,
    // Serializes read-modify-write cycles; the rename makes each commit
    // atomic against readers.
    write_lock: Mutex<()>,
}

impl JsonRewardStore {
    pub fn new(users_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&users_dir)?;
        Ok(Self {
            users_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn journal_path(&self, user_id: Uuid) -> PathBuf {
        self.users_dir
            .join(format!("{}.{}", user_id, JOURNAL_EXTENSION))
    }

    /// Creates an empty journal for the user if none exists yet and
    /// returns the stored balance. Idempotent.
    pub fn create_profile(&self, user_id: Uuid) -> Result<UserBalance, CoreError> {
        let _guard = self.lock()?;
        match self.load_journal(user_id) {
            Ok(journal) => Ok(journal.balance),
            Err(CoreError::UserNotFound(_)) => {
                let journal = UserJournal::new(user_id, Utc::now());
                self.save_journal(&journal)?;
                Ok(journal.balance)
            }
            Err(err) => Err(err),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, CoreError> {
        self.write_lock
            .lock()
            .map_err(|_| CoreError::Storage("storage lock poisoned".into()))
    }

    fn load_journal(&self, user_id: Uuid) -> Result<UserJournal, CoreError> {
        let path = self.journal_path(user_id);
        if !path.exists() {
            return Err(CoreError::UserNotFound(user_id));
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Storage(err.to_string()))
    }

    fn save_journal(&self, journal: &UserJournal) -> Result<(), CoreError> {
        let path = self.journal_path(journal.user_id);
        let json = serde_json::to_string_pretty(journal)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl RewardStore for JsonRewardStore {
    fn fetch_balance(&self, user_id: Uuid) -> Result<UserBalance, CoreError> {
        let _guard = self.lock()?;
        Ok(self.load_journal(user_id)?.balance)
    }

    fn commit_item_batch(
        &self,
        user_id: Uuid,
        items: &[LoggedItem],
        earned: CurrencyTriple,
    ) -> Result<UserBalance, CoreError> {
        let _guard = self.lock()?;
        let mut journal = self.load_journal(user_id)?;
        let updated = journal
            .balance
            .checked_apply(&CurrencyDelta::earn(earned), items.len() as u32)
            .ok_or_else(|| CoreError::Storage("balance overflow".into()))?;
        journal.balance = updated;
        journal.items.extend_from_slice(items);
        journal.updated_at = Utc::now();
        self.save_journal(&journal)?;
        Ok(updated)
    }

    fn commit_purchase(
        &self,
        user_id: Uuid,
        purchase: &PurchaseRecord,
    ) -> Result<UserBalance, CoreError> {
        let _guard = self.lock()?;
        let mut journal = self.load_journal(user_id)?;
        let updated = match journal
            .balance
            .checked_apply(&CurrencyDelta::spend(purchase.cost), 0)
        {
            Some(balance) => balance,
            None => {
                let (kind, required, available) = journal
                    .balance
                    .first_deficit(&purchase.cost)
                    .ok_or_else(|| CoreError::Storage("balance overflow".into()))?;
                return Err(CoreError::InsufficientFunds {
                    kind,
                    required,
                    available,
                });
            }
        };
        journal.balance = updated;
        journal.purchases.push(purchase.clone());
        journal.updated_at = Utc::now();
        self.save_journal(&journal)?;
        Ok(updated)
    }

    fn logged_items(&self, user_id: Uuid) -> Result<Vec<LoggedItem>, CoreError> {
        let _guard = self.lock()?;
        Ok(self.load_journal(user_id)?.items)
    }

    fn purchases(&self, user_id: Uuid) -> Result<Vec<PurchaseRecord>, CoreError> {
        let _guard = self.lock()?;
        Ok(self.load_journal(user_id)?.purchases)
    }
}

/// Loads a catalog from a JSON file, for deployments overriding the
/// built-in catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Storage(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
