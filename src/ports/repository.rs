//! Repository Port - Project Store Interface
//!
//! Defines the trait through which the rest of the application reads and
//! mutates race projects. The odds core only ever consumes votes snapshots
//! obtained here; it never writes back.

use async_trait::async_trait;

use crate::domain::odds::Votes;
use crate::domain::project::{Project, ProjectSummary};
use crate::domain::wager::WagerType;

/// Trait for project persistence providers.
///
/// Every mutation must be durable before the call returns: the surrounding
/// application treats a returned `Ok` as "persisted".
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    /// List all stored projects.
    async fn list(&self) -> anyhow::Result<Vec<ProjectSummary>>;

    /// Fetch one project by name.
    async fn get(&self, name: &str) -> anyhow::Result<Option<Project>>;

    /// Create a new empty project. Fails if the name is already taken.
    async fn create(&self, name: &str, entrants: u32) -> anyhow::Result<Project>;

    /// Delete a project. Returns `false` if no such project existed.
    async fn delete(&self, name: &str) -> anyhow::Result<bool>;

    /// Replace the recorded votes for one pool of a project.
    async fn save_votes(
        &self,
        name: &str,
        wager: WagerType,
        votes: Votes,
    ) -> anyhow::Result<Project>;

    /// Votes snapshot for a pool. Returns an empty mapping when the project
    /// or the pool has nothing recorded.
    async fn get_votes(&self, name: &str, wager: WagerType) -> anyhow::Result<Votes>;

    /// Check that the backing store is reachable and writable.
    async fn is_healthy(&self) -> bool;
}
