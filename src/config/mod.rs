//! Configuration Module - TOML-based Service Configuration
//!
//! Loads and validates configuration from `config.toml`. Every section has
//! serde defaults, so a missing file or a partial file both yield a runnable
//! configuration. Payout rates are externalized here and fixed for the
//! lifetime of the process.

pub mod loader;

use serde::Deserialize;

use crate::domain::odds::PayoutRates;

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Service identity and logging.
    pub app: AppSection,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Input bounds enforced before anything reaches the store.
    pub limits: LimitsConfig,
    /// Persistence settings.
    pub persistence: PersistenceConfig,
    /// Payout rates per wager pool.
    pub payout_rates: PayoutRates,
}

/// Service identity configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Human-readable service name.
    pub name: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "parimutuel-odds".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, e.g. `0.0.0.0:8080`.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Input bounds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted entrant count. Triple pools enumerate O(N³) keys,
    /// so this bound is also the computational ceiling.
    pub max_entrants: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_entrants: 40 }
    }
}

/// Persistence configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Directory holding the projects snapshot.
    pub data_dir: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}
