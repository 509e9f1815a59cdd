//! Project Manager - Lifecycle and Vote Validation
//!
//! Gatekeeper in front of the repository: the odds engine assumes
//! well-formed input, so everything reaching the store is validated here.
//! Vote counts are non-negative by construction (`u64`); this layer checks
//! the shape the types cannot: name rules, entrant bounds, and key-space
//! membership of submitted outcome keys.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use tracing::info;

use crate::domain::odds::Votes;
use crate::domain::project::{Project, ProjectSummary};
use crate::domain::wager::{outcome_keys, WagerType};
use crate::ports::repository::ProjectRepository;

/// Rejected input, mapped to a client error at the API boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("project name must not be empty")]
    EmptyName,

    #[error("project '{0}' already exists")]
    DuplicateName(String),

    #[error("unknown project '{0}'")]
    UnknownProject(String),

    #[error("entrant count must be between 1 and {max}, got {got}")]
    EntrantsOutOfRange { got: u32, max: u32 },

    #[error("outcome key '{key}' is not bettable for {wager} with {entrants} entrants")]
    InvalidOutcomeKey {
        key: String,
        wager: WagerType,
        entrants: u32,
    },
}

/// Project lifecycle operations with input validation.
pub struct ProjectManager {
    repo: Arc<dyn ProjectRepository>,
    max_entrants: u32,
}

impl ProjectManager {
    pub fn new(repo: Arc<dyn ProjectRepository>, max_entrants: u32) -> Self {
        Self { repo, max_entrants }
    }

    pub async fn list(&self) -> Result<Vec<ProjectSummary>> {
        self.repo.list().await
    }

    pub async fn get(&self, name: &str) -> Result<Option<Project>> {
        self.repo.get(name).await
    }

    /// Create a project after checking name and entrant bounds.
    pub async fn create(&self, name: &str, entrants: u32) -> Result<Project> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if entrants == 0 || entrants > self.max_entrants {
            return Err(ValidationError::EntrantsOutOfRange {
                got: entrants,
                max: self.max_entrants,
            }
            .into());
        }
        if self.repo.get(name).await?.is_some() {
            return Err(ValidationError::DuplicateName(name.to_string()).into());
        }
        let project = self.repo.create(name, entrants).await?;
        info!(project = %project.name, entrants, "Project created");
        Ok(project)
    }

    /// Delete a project. Returns `false` when it did not exist.
    pub async fn delete(&self, name: &str) -> Result<bool> {
        let deleted = self.repo.delete(name).await?;
        if deleted {
            info!(project = name, "Project deleted");
        }
        Ok(deleted)
    }

    /// Validate a votes mapping against the pool's key space and persist it.
    ///
    /// Every submitted key must be bettable for this project's entrant
    /// count; the mapping replaces whatever was recorded before (upsert).
    pub async fn record_votes(
        &self,
        name: &str,
        wager: WagerType,
        votes: Votes,
    ) -> Result<Project> {
        let Some(project) = self.repo.get(name).await? else {
            return Err(ValidationError::UnknownProject(name.to_string()).into());
        };

        let valid: BTreeSet<String> =
            outcome_keys(wager, project.entrants).into_iter().collect();
        if let Some(bad) = votes.keys().find(|k| !valid.contains(*k)) {
            return Err(ValidationError::InvalidOutcomeKey {
                key: bad.clone(),
                wager,
                entrants: project.entrants,
            }
            .into());
        }

        let total: u64 = votes.values().sum();
        let updated = self.repo.save_votes(name, wager, votes).await?;
        info!(project = name, %wager, total, "Votes recorded");
        Ok(updated)
    }
}
