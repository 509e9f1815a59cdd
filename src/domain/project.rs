//! Race project entities.
//!
//! A project is one race setup: a unique name, the entrant count, and the
//! recorded vote tallies per wager pool. The odds engine never mutates a
//! project; it consumes a votes snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::odds::Votes;
use super::wager::WagerType;

/// One race setup with its recorded vote tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name (the project's identity).
    pub name: String,
    /// Number of entrants in the race.
    pub entrants: u32,
    /// Recorded votes per wager pool. Pools without recorded votes are
    /// simply absent.
    #[serde(default)]
    pub votes: BTreeMap<WagerType, Votes>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a fresh project with no recorded votes.
    pub fn new(name: impl Into<String>, entrants: u32) -> Self {
        Self {
            name: name.into(),
            entrants,
            votes: BTreeMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// Votes snapshot for one pool; empty mapping when nothing is recorded.
    pub fn votes_for(&self, wager: WagerType) -> Votes {
        self.votes.get(&wager).cloned().unwrap_or_default()
    }

    /// Pools that have recorded votes, in the fixed display order.
    pub fn recorded_pools(&self) -> Vec<WagerType> {
        WagerType::ALL
            .into_iter()
            .filter(|w| self.votes.contains_key(w))
            .collect()
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            name: self.name.clone(),
            entrants: self.entrants,
            recorded_pools: self.recorded_pools(),
            updated_at: self.updated_at,
        }
    }
}

/// Listing view of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub entrants: u32,
    pub recorded_pools: Vec<WagerType>,
    pub updated_at: DateTime<Utc>,
}
