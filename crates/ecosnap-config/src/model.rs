use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable application preferences and tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for user journals. Defaults to the
    /// platform data directory under `EcoSnap`.
    pub data_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional path to a catalog JSON file overriding the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    #[serde(default)]
    pub game: GameSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_path: None,
            game: GameSettings::default(),
        }
    }
}

impl Config {
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("EcoSnap")
    }
}

/// Tuning values for the Eco Catch mini-game. The reward tier table is a
/// correctness contract and lives in code; everything here is a tuning
/// parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    #[serde(default = "GameSettings::default_session_secs")]
    pub session_secs: u64,
    #[serde(default = "GameSettings::default_spawn_interval_ms")]
    pub spawn_interval_ms: u64,
    #[serde(default = "GameSettings::default_orb_lifetime_ms")]
    pub orb_lifetime_ms: u64,
    #[serde(default = "GameSettings::default_rare_odds")]
    pub rare_odds: f64,
    #[serde(default = "GameSettings::default_ultra_odds")]
    pub ultra_odds: f64,
    #[serde(default = "GameSettings::default_boost_ttl_mins")]
    pub boost_ttl_mins: i64,
}

impl GameSettings {
    pub fn default_session_secs() -> u64 {
        10
    }

    pub fn default_spawn_interval_ms() -> u64 {
        600
    }

    pub fn default_orb_lifetime_ms() -> u64 {
        1500
    }

    pub fn default_rare_odds() -> f64 {
        0.2
    }

    pub fn default_ultra_odds() -> f64 {
        0.1
    }

    pub fn default_boost_ttl_mins() -> i64 {
        15
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            session_secs: Self::default_session_secs(),
            spawn_interval_ms: Self::default_spawn_interval_ms(),
            orb_lifetime_ms: Self::default_orb_lifetime_ms(),
            rare_odds: Self::default_rare_odds(),
            ultra_odds: Self::default_ultra_odds(),
            boost_ttl_mins: Self::default_boost_ttl_mins(),
        }
    }
}
