//! HTTP handlers for projects, votes, and odds sheets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use super::AppState;
use crate::domain::odds::Votes;
use crate::domain::project::{Project, ProjectSummary};
use crate::domain::wager::WagerType;
use crate::usecases::{OddsRequest, OddsSheet};

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub entrants: u32,
}

#[derive(Debug, Deserialize)]
pub struct SaveVotesRequest {
    pub votes: Votes,
}

/// Liveness probe: 200 if the process is running.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe: 503 during graceful shutdown or when the store is
/// unhealthy.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    let accepting = *state.ready.borrow();
    if accepting && state.repo.is_healthy().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectSummary>>, ApiError> {
    Ok(Json(state.manager.list().await?))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.manager.create(&req.name, req.entrants).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Project>, ApiError> {
    state
        .manager
        .get(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("unknown project '{name}'")))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.manager.delete(&name).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("unknown project '{name}'")))
    }
}

pub async fn save_votes(
    State(state): State<AppState>,
    Path((name, wager)): Path<(String, String)>,
    Json(req): Json<SaveVotesRequest>,
) -> Result<Json<Project>, ApiError> {
    let wager = parse_wager(&wager)?;
    let project = state.manager.record_votes(&name, wager, req.votes).await?;
    Ok(Json(project))
}

pub async fn project_odds(
    State(state): State<AppState>,
    Path((name, wager)): Path<(String, String)>,
) -> Result<Json<OddsSheet>, ApiError> {
    let wager = parse_wager(&wager)?;
    state
        .odds
        .sheet(&name, wager)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("unknown project '{name}'")))
}

pub async fn project_sheets(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<OddsSheet>>, ApiError> {
    state
        .odds
        .sheets(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("unknown project '{name}'")))
}

/// Stateless quote: `{wager_type, entrant_count, votes}` in, odds sheet out.
pub async fn quote(
    State(state): State<AppState>,
    Json(req): Json<OddsRequest>,
) -> Result<Json<OddsSheet>, ApiError> {
    if req.entrant_count == 0 || req.entrant_count > state.max_entrants {
        return Err(ApiError::BadRequest(format!(
            "entrant count must be between 1 and {}, got {}",
            state.max_entrants, req.entrant_count
        )));
    }
    Ok(Json(state.odds.quote(
        req.wager_type,
        req.entrant_count,
        &req.votes,
    )))
}

fn parse_wager(name: &str) -> Result<WagerType, ApiError> {
    WagerType::parse(name)
        .ok_or_else(|| ApiError::NotFound(format!("unknown wager type '{name}'")))
}
