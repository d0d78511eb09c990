//! ecosnap-core
//!
//! Business logic and services for the EcoSnap reward engine.
//! Depends on ecosnap-domain. No UI, no terminal I/O, no direct storage
//! interactions; persistence and classification are trait-shaped
//! collaborators.

pub mod carbon_service;
pub mod classifier;
pub mod currency_service;
pub mod error;
pub mod game_service;
pub mod logging_service;
pub mod pricing_service;
pub mod purchase_service;
pub mod store;
pub mod time;

pub use carbon_service::*;
pub use classifier::*;
pub use currency_service::*;
pub use error::{CoreError, Result};
pub use game_service::*;
pub use logging_service::*;
pub use pricing_service::*;
pub use purchase_service::*;
pub use store::*;
pub use time::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("ecosnap_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("EcoSnap core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
