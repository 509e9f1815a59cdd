//! Parimutuel Odds Service — Entry Point
//!
//! Initializes configuration, logging, the project store, and the HTTP
//! server. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate (missing file → defaults)
//! 2. Init tracing (JSON structured logging)
//! 3. Open the JSON project repository from the data directory
//! 4. Build usecases (ProjectManager, OddsService)
//! 5. Serve the axum API with a readiness flag
//! 6. Wait for SIGINT → flip /ready to 503 → drain → exit

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

use parimutuel_odds::adapters::api::{self, AppState};
use parimutuel_odds::adapters::persistence::JsonProjectRepository;
use parimutuel_odds::config;
use parimutuel_odds::ports::repository::ProjectRepository;
use parimutuel_odds::usecases::{OddsService, ProjectManager};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.app.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting parimutuel odds service"
    );

    // ── 3. Open the project repository ──────────────────────
    let repo: Arc<dyn ProjectRepository> = Arc::new(
        JsonProjectRepository::open(&config.persistence.data_dir)
            .await
            .context("Failed to open project repository")?,
    );

    // ── 4. Build usecases ───────────────────────────────────
    let manager = Arc::new(ProjectManager::new(
        Arc::clone(&repo),
        config.limits.max_entrants,
    ));
    let odds = Arc::new(OddsService::new(
        Arc::clone(&repo),
        config.payout_rates,
    ));

    // ── 5. Serve the HTTP API ───────────────────────────────
    let (ready_tx, ready_rx) = watch::channel(true);
    let state = AppState {
        manager,
        odds,
        repo,
        max_entrants: config.limits.max_entrants,
        ready: ready_rx,
    };
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| {
            format!("Failed to bind {}", config.server.bind_address)
        })?;
    info!(address = %config.server.bind_address, "HTTP server listening");

    // ── 6. Run until SIGINT, then drain gracefully ──────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = signal::ctrl_c().await;
            info!("SIGINT received, initiating graceful shutdown");
            // Readiness probe flips to 503 while in-flight requests drain.
            let _ = ready_tx.send(false);
        })
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}
