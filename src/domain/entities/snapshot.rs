//! Snapshot - the read-only bundle the engine computes over
//!
//! All collections are expected to reflect the same point in time. Nothing
//! here checks that; a torn snapshot just yields figures for a torn snapshot.

use serde::{Deserialize, Serialize};

use super::{Founder, MissionAssignment, Post, RevenueEntry, SecondaryMission};
use crate::domain::value_objects::SprintSettings;
use crate::error::{MissionError, MissionResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub settings: SprintSettings,
    #[serde(default)]
    pub founders: Vec<Founder>,
    #[serde(default)]
    pub revenue: Vec<RevenueEntry>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub missions: Vec<SecondaryMission>,
    #[serde(default)]
    pub assignments: Vec<MissionAssignment>,
}

impl Snapshot {
    /// Empty snapshot for the given settings
    pub fn new(settings: SprintSettings) -> Self {
        Self {
            settings,
            founders: Vec::new(),
            revenue: Vec::new(),
            posts: Vec::new(),
            missions: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub fn founder(&self, id: u64) -> Option<&Founder> {
        self.founders.iter().find(|f| f.id == id)
    }

    /// Display name for a founder id, `"Unknown"` when it matches nobody
    pub fn founder_name(&self, id: u64) -> &str {
        self.founder(id).map(|f| f.name.as_str()).unwrap_or("Unknown")
    }

    /// Look a founder up by numeric id or by (case-insensitive) name
    pub fn find_founder(&self, query: &str) -> MissionResult<&Founder> {
        let by_id = query
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(|id| self.founder(id));

        by_id
            .or_else(|| self.founders.iter().find(|f| f.is_named(query)))
            .ok_or_else(|| MissionError::FounderNotFound {
                query: query.to_string(),
            })
    }

    /// Sort revenue and posts newest first
    ///
    /// Entries with unparseable dates sink to the end. Aggregates are
    /// order-independent, so this only affects listings.
    pub fn sort_newest_first(&mut self) {
        self.revenue
            .sort_by(|a, b| b.calendar_date().cmp(&a.calendar_date()));
        self.posts.sort_by(|a, b| b.posted_at().cmp(&a.posted_at()));
    }
}
