//! HTTP API adapter - axum routes over the usecases layer.

pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use tokio::sync::watch;

use crate::ports::repository::ProjectRepository;
use crate::usecases::{OddsService, ProjectManager};

pub use error::{ApiError, ErrorBody};
pub use routes::router;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<ProjectManager>,
    pub odds: Arc<OddsService>,
    pub repo: Arc<dyn ProjectRepository>,
    /// Entrant-count ceiling for stateless quotes.
    pub max_entrants: u32,
    /// Flipped to `false` during graceful shutdown so `/ready` returns 503.
    pub ready: watch::Receiver<bool>,
}
