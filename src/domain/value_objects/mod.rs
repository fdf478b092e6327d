//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod mission_selector;
mod pacing_tier;
mod sprint;
mod year_month;

pub use mission_selector::MissionSelector;
pub use pacing_tier::{PacingTier, NEAR_PACE_THRESHOLD, ON_PACE_THRESHOLD};
pub use sprint::{SprintConfig, SprintSettings};
pub use year_month::YearMonth;
