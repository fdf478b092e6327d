//! Mission selector value object
//!
//! Decides which secondary mission is "the" secondary mission. Selecting by a
//! stable id is preferred; the keyword form keeps the name-substring lookup
//! for data sets that have no agreed id.

use serde::{Deserialize, Serialize};

use crate::domain::entities::SecondaryMission;

/// Name keyword followed when no mission is configured
pub const DEFAULT_MISSION_KEYWORD: &str = "echodeck";

/// How the active secondary mission is picked from the snapshot
///
/// When nothing matches, secondary figures are switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionSelector {
    /// Mission with exactly this id
    Id(u64),
    /// First mission whose name contains this keyword (case-insensitive)
    Keyword(String),
}

impl Default for MissionSelector {
    fn default() -> Self {
        MissionSelector::Keyword(DEFAULT_MISSION_KEYWORD.to_string())
    }
}

impl MissionSelector {
    /// Build a selector from a user-supplied value: digits select by id,
    /// anything else is a name keyword. A blank value gives the default.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<u64>() {
            Ok(id) => MissionSelector::Id(id),
            Err(_) if value.is_empty() => MissionSelector::default(),
            Err(_) => MissionSelector::Keyword(value.to_string()),
        }
    }

    /// Whether a mission satisfies this selector on its own
    pub fn matches(&self, mission: &SecondaryMission) -> bool {
        match self {
            MissionSelector::Id(id) => mission.id == *id,
            MissionSelector::Keyword(keyword) => mission
                .name
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
        }
    }
}

impl std::fmt::Display for MissionSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionSelector::Id(id) => write!(f, "id {}", id),
            MissionSelector::Keyword(keyword) => write!(f, "name containing '{}'", keyword),
        }
    }
}
