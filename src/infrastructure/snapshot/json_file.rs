//! JSON snapshot file source
//!
//! Reads an export of the dashboard tables:
//!
//! ```json
//! {
//!   "config": [{ "key": "sprintStartYear", "value": "2024" }, ...],
//!   "founders": [...],
//!   "revenue": [...],
//!   "posts": [...],
//!   "secondary_missions": [...],
//!   "founder_secondary_missions": [...]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SprintOverrides;
use crate::domain::entities::{
    Founder, MissionAssignment, Post, RevenueEntry, SecondaryMission, Snapshot,
};
use crate::domain::ports::SnapshotSource;
use crate::error::{MissionError, MissionResult};
use crate::infrastructure::settings::{resolve_settings, ConfigRow};

/// On-disk shape of a snapshot export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub config: Vec<ConfigRow>,
    #[serde(default)]
    pub founders: Vec<Founder>,
    #[serde(default)]
    pub revenue: Vec<RevenueEntry>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub secondary_missions: Vec<SecondaryMission>,
    #[serde(default)]
    pub founder_secondary_missions: Vec<MissionAssignment>,
}

impl SnapshotDocument {
    /// Resolve settings and assemble the domain snapshot
    pub fn into_snapshot(self, overrides: &SprintOverrides) -> MissionResult<Snapshot> {
        let settings = resolve_settings(&self.config, overrides, &self.founders)?;
        report_ignored_rows(&self.founders, &self.revenue);

        let mut snapshot = Snapshot {
            settings,
            founders: self.founders,
            revenue: self.revenue,
            posts: self.posts,
            missions: self.secondary_missions,
            assignments: self.founder_secondary_missions,
        };
        snapshot.sort_newest_first();
        Ok(snapshot)
    }
}

/// Rows the engine will silently skip in some filters
fn report_ignored_rows(founders: &[Founder], revenue: &[RevenueEntry]) {
    let known: HashSet<u64> = founders.iter().map(|f| f.id).collect();
    for entry in revenue {
        if !known.contains(&entry.founder_id) {
            debug!(
                entry = entry.id,
                founder = entry.founder_id,
                "revenue entry references unknown founder"
            );
        }
        if entry.calendar_date().is_none() {
            debug!(entry = entry.id, date = %entry.date, "revenue entry has unparseable date");
        }
    }
}

/// Snapshot source backed by a JSON file, re-read on every load
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
    overrides: SprintOverrides,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overrides: SprintOverrides::default(),
        }
    }

    /// Sprint values that take precedence over the file's config rows
    pub fn with_overrides(mut self, overrides: SprintOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

impl SnapshotSource for JsonSnapshotFile {
    fn load(&self) -> MissionResult<Snapshot> {
        let content = fs::read_to_string(&self.path)?;
        let document: SnapshotDocument =
            serde_json::from_str(&content).map_err(|e| MissionError::InvalidSnapshot {
                file: self.path.clone(),
                message: e.to_string(),
            })?;

        let snapshot = document.into_snapshot(&self.overrides)?;
        info!(
            path = %self.path.display(),
            founders = snapshot.founders.len(),
            revenue = snapshot.revenue.len(),
            posts = snapshot.posts.len(),
            missions = snapshot.missions.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
