//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters, and providing
//! clear error messages for misconfiguration. A missing file is not an
//! error: defaults cover every field.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::domain::wager::WagerType;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config.toml")?
    } else {
        AppConfig::default()
    };

    validate_config(&config)?;

    info!(
        bind = %config.server.bind_address,
        data_dir = %config.persistence.data_dir,
        max_entrants = config.limits.max_entrants,
        "Configuration loaded"
    );

    Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Payout rates strictly inside (0, 1) for every pool
/// - A usable entrant-count ceiling
/// - Non-empty bind address and data directory
fn validate_config(config: &AppConfig) -> Result<()> {
    for wager in WagerType::ALL {
        let rate = config.payout_rates.rate(wager);
        anyhow::ensure!(
            rate > 0.0 && rate < 1.0,
            "payout rate for {} must be in (0, 1), got {}",
            wager,
            rate
        );
    }

    anyhow::ensure!(
        config.limits.max_entrants >= 1,
        "max_entrants must be at least 1"
    );

    anyhow::ensure!(
        !config.server.bind_address.is_empty(),
        "server bind_address must not be empty"
    );
    anyhow::ensure!(
        !config.persistence.data_dir.is_empty(),
        "persistence data_dir must not be empty"
    );

    Ok(())
}
