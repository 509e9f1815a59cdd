//! Repository Implementation — Concrete Adapter for the Repository Port
//!
//! Wraps `ProjectStore` (atomic JSON snapshots) behind an in-memory map so
//! reads never touch the disk. Every mutation rewrites the snapshot before
//! returning, matching the "persisted on every mutation" contract.
//!
//! This is the hexagonal architecture glue: the usecases layer only knows
//! about the `ProjectRepository` trait, never about files or JSON.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::store::ProjectStore;
use crate::domain::odds::Votes;
use crate::domain::project::{Project, ProjectSummary};
use crate::domain::wager::WagerType;
use crate::ports::repository::ProjectRepository;

/// Concrete repository adapter backed by a JSON snapshot file.
pub struct JsonProjectRepository {
    /// Atomic JSON snapshot store.
    store: ProjectStore,
    /// In-memory view of the stored projects, keyed by name.
    projects: RwLock<BTreeMap<String, Project>>,
}

impl JsonProjectRepository {
    /// Open the repository in a data directory, loading any existing
    /// snapshot into memory.
    pub async fn open(data_dir: &str) -> Result<Self> {
        let store = ProjectStore::new(data_dir).await?;
        let projects = store.load().await?;
        Ok(Self {
            store,
            projects: RwLock::new(projects),
        })
    }
}

#[async_trait]
impl ProjectRepository for JsonProjectRepository {
    async fn list(&self) -> Result<Vec<ProjectSummary>> {
        let projects = self.projects.read().await;
        Ok(projects.values().map(Project::summary).collect())
    }

    async fn get(&self, name: &str) -> Result<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(name).cloned())
    }

    async fn create(&self, name: &str, entrants: u32) -> Result<Project> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(name) {
            bail!("project '{name}' already exists");
        }
        let project = Project::new(name, entrants);
        projects.insert(name.to_string(), project.clone());
        self.store.save(&projects).await?;
        Ok(project)
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let mut projects = self.projects.write().await;
        if projects.remove(name).is_none() {
            return Ok(false);
        }
        self.store.save(&projects).await?;
        Ok(true)
    }

    async fn save_votes(
        &self,
        name: &str,
        wager: WagerType,
        votes: Votes,
    ) -> Result<Project> {
        let mut projects = self.projects.write().await;
        let Some(project) = projects.get_mut(name) else {
            bail!("unknown project '{name}'");
        };
        project.votes.insert(wager, votes);
        project.updated_at = Utc::now();
        let updated = project.clone();
        self.store.save(&projects).await?;
        Ok(updated)
    }

    async fn get_votes(&self, name: &str, wager: WagerType) -> Result<Votes> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(name)
            .map(|p| p.votes_for(wager))
            .unwrap_or_default())
    }

    async fn is_healthy(&self) -> bool {
        self.store.is_healthy().await
    }
}
