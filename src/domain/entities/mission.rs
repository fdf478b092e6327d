//! Secondary mission and per-founder share assignments

use serde::{Deserialize, Serialize};

/// An auxiliary growth initiative with its own ARR and customer targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryMission {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub target_arr: f64,
    pub target_customers: u32,
}

/// A founder's percentage share of a mission's ARR target
///
/// Shares for one mission are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionAssignment {
    pub id: u64,
    pub founder_id: u64,
    pub mission_id: u64,
    /// 0-100
    pub share_percentage: f64,
}

impl MissionAssignment {
    /// Whether this assignment links `founder_id` to `mission_id`
    pub fn links(&self, founder_id: u64, mission_id: u64) -> bool {
        self.founder_id == founder_id && self.mission_id == mission_id
    }
}
