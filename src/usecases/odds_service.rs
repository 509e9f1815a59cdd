//! Odds Service - Sheet Assembly Over the Project Store
//!
//! Bridges the pure odds engine and the project repository: enumerates the
//! full key space from the entrant count, overlays whatever votes are
//! recorded (missing outcomes count as zero), runs the engine, and emits
//! rows in key-enumeration order so repeated calls are byte-identical.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::odds::{self, OddsValue, OutcomeKey, PayoutRates, Votes};
use crate::domain::wager::{outcome_keys, WagerType};
use crate::ports::repository::ProjectRepository;

/// One outcome row of an odds sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsRow {
    pub key: OutcomeKey,
    pub votes: u64,
    pub odds: OddsValue,
}

/// Computed odds for one pool of a race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsSheet {
    pub wager: WagerType,
    pub entrants: u32,
    pub total_votes: u64,
    /// Rows in key-enumeration order (lexicographic by entrant number).
    pub rows: Vec<OddsRow>,
}

/// Stateless quote request: the natural service-interface shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsRequest {
    pub wager_type: WagerType,
    pub entrant_count: u32,
    pub votes: Votes,
}

/// Computes odds sheets from stored or caller-supplied votes.
pub struct OddsService {
    repo: Arc<dyn ProjectRepository>,
    rates: PayoutRates,
}

impl OddsService {
    pub fn new(repo: Arc<dyn ProjectRepository>, rates: PayoutRates) -> Self {
        Self { repo, rates }
    }

    /// Compute a sheet directly from a votes mapping, without touching the
    /// store. Keys outside the enumerated key space are ignored; keys the
    /// mapping lacks count as zero votes.
    pub fn quote(&self, wager: WagerType, entrants: u32, votes: &Votes) -> OddsSheet {
        let keys = outcome_keys(wager, entrants);
        let filled: Votes = keys
            .iter()
            .map(|k| (k.clone(), votes.get(k).copied().unwrap_or(0)))
            .collect();
        let table = odds::compute(wager, &filled, &self.rates);
        let total_votes = filled.values().sum();
        let rows = keys
            .into_iter()
            .map(|key| OddsRow {
                votes: filled[&key],
                odds: table[&key],
                key,
            })
            .collect();
        OddsSheet {
            wager,
            entrants,
            total_votes,
            rows,
        }
    }

    /// Sheet for one pool of a stored project. `None` if the project does
    /// not exist.
    pub async fn sheet(&self, name: &str, wager: WagerType) -> Result<Option<OddsSheet>> {
        let Some(project) = self.repo.get(name).await? else {
            return Ok(None);
        };
        Ok(Some(self.quote(
            wager,
            project.entrants,
            &project.votes_for(wager),
        )))
    }

    /// Sheets for every pool of a project that has recorded votes, in the
    /// fixed display order. `None` if the project does not exist.
    pub async fn sheets(&self, name: &str) -> Result<Option<Vec<OddsSheet>>> {
        let Some(project) = self.repo.get(name).await? else {
            return Ok(None);
        };
        let sheets = project
            .recorded_pools()
            .into_iter()
            .map(|wager| self.quote(wager, project.entrants, &project.votes_for(wager)))
            .collect();
        Ok(Some(sheets))
    }
}
