//! ecosnap-config
//!
//! Serializable application configuration and its JSON-file manager.
//! No domain logic; only preferences and tuning values.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, GameSettings};
