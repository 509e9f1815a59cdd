//! Route table for the odds service API.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers;
use super::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/live", get(handlers::liveness))
        .route("/ready", get(handlers::readiness))
        .route(
            "/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route(
            "/projects/:name",
            get(handlers::get_project).delete(handlers::delete_project),
        )
        .route("/projects/:name/votes/:wager", put(handlers::save_votes))
        .route("/projects/:name/odds", get(handlers::project_sheets))
        .route("/projects/:name/odds/:wager", get(handlers::project_odds))
        .route("/quotes", post(handlers::quote))
        .with_state(state)
}
