//! Founder entity

use serde::{Deserialize, Serialize};

/// A founder with a personal primary-revenue target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub id: u64,
    pub name: String,
    /// Personal target for the primary revenue stream
    pub target: f64,
    /// Login credential; never echoed back out
    #[serde(default, skip_serializing)]
    pub access_key: String,
}

impl Founder {
    /// Case-insensitive name comparison used by founder lookups
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}
