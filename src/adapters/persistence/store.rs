//! Project Store - Atomic JSON Snapshot Persistence
//!
//! Saves the full project map to `projects.json` using atomic writes
//! (write to tmp file, then rename). This guarantees crash safety and
//! prevents partial writes from corrupting the stored projects.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, instrument};

use crate::domain::project::Project;

/// Atomic JSON snapshot store for race projects.
///
/// The snapshot is written to a temporary file first, then atomically
/// renamed to `projects.json`. The file on disk is always either the old
/// or the new version, never a partial write.
pub struct ProjectStore {
    /// Path to projects.json.
    snapshot_path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl ProjectStore {
    /// Create a new project store in the given data directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub async fn new(data_dir: &str) -> Result<Self> {
        let dir = Path::new(data_dir);
        fs::create_dir_all(dir)
            .await
            .context("Failed to create data directory")?;

        Ok(Self {
            snapshot_path: dir.join("projects.json"),
            tmp_path: dir.join("projects.json.tmp"),
        })
    }

    /// Save the full project map atomically (tmp → rename).
    #[instrument(skip(self, projects))]
    pub async fn save(&self, projects: &BTreeMap<String, Project>) -> Result<()> {
        let json = serde_json::to_string_pretty(projects)
            .context("Failed to serialize projects")?;

        // Write to tmp file
        fs::write(&self.tmp_path, &json)
            .await
            .context("Failed to write tmp projects file")?;

        // Atomic rename
        fs::rename(&self.tmp_path, &self.snapshot_path)
            .await
            .context("Failed to rename projects file")?;

        info!(
            path = %self.snapshot_path.display(),
            projects = projects.len(),
            "Projects snapshot saved"
        );

        Ok(())
    }

    /// Load the stored project map.
    ///
    /// Returns an empty map if no snapshot exists (first startup).
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<BTreeMap<String, Project>> {
        if !self.snapshot_path.exists() {
            info!("No projects file found, starting fresh");
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.snapshot_path)
            .await
            .context("Failed to read projects file")?;

        let projects: BTreeMap<String, Project> =
            serde_json::from_str(&json).context("Failed to parse projects JSON")?;

        info!(projects = projects.len(), "Projects snapshot loaded");

        Ok(projects)
    }

    /// Check if the snapshot file is absent (fine) or readable.
    pub async fn is_healthy(&self) -> bool {
        if !self.snapshot_path.exists() {
            return true; // First run is OK
        }
        fs::metadata(&self.snapshot_path).await.is_ok()
    }
}
