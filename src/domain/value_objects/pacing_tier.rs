//! Pacing Tier Value Object
//!
//! Three-way classification of a pacing percentage. Boundaries are half-open:
//! exactly 100 is on pace and exactly 80 is near pace.

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the on-pace tier
pub const ON_PACE_THRESHOLD: f64 = 100.0;
/// Lower bound (inclusive) of the near-pace tier
pub const NEAR_PACE_THRESHOLD: f64 = 80.0;

/// How revenue compares to where it should be by now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PacingTier {
    /// Below 80% of the expected revenue to date
    BehindPace,
    /// 80% up to (not including) 100%
    NearPace,
    /// At or above the expected revenue to date
    OnPace,
}

impl PacingTier {
    /// Classify a pacing percentage
    pub fn classify(percentage: f64) -> Self {
        if percentage >= ON_PACE_THRESHOLD {
            PacingTier::OnPace
        } else if percentage >= NEAR_PACE_THRESHOLD {
            PacingTier::NearPace
        } else {
            PacingTier::BehindPace
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PacingTier::BehindPace => "behind-pace",
            PacingTier::NearPace => "near-pace",
            PacingTier::OnPace => "on-pace",
        }
    }
}

impl std::fmt::Display for PacingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
