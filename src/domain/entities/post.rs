//! Team update posts (wins and blockers)

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Kind of team update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Win,
    Blocker,
}

/// A win or blocker posted by a founder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author_id: u64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

impl Post {
    pub fn posted_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.timestamp.trim()).ok()
    }
}
