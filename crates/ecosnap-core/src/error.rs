use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use ecosnap_domain::CurrencyKind;

/// Unified error type for the reward engine's services and collaborators.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Retryable classifier failure; no currency or balance state was
    /// touched.
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("User not found: {0}")]
    UserNotFound(Uuid),
    /// Local rejection raised before any write is attempted; a surplus in
    /// one currency never offsets a deficit in another.
    #[error("Insufficient {kind} currency: need {required}, have {available}")]
    InsufficientFunds {
        kind: CurrencyKind,
        required: u32,
        available: u32,
    },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CoreError>;

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}
