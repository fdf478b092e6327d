//! Sprint window value objects
//!
//! The sprint is the fixed multi-month window every target and month index is
//! measured against. It is passed explicitly to every calculation that needs
//! it; there is no ambient sprint state.

use serde::{Deserialize, Serialize};

use super::YearMonth;

/// Start month and length of the sprint
///
/// Invariants (enforced by the loaders, assumed by the engine):
/// `start_month` is 1-12 and `total_months` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintConfig {
    pub start_year: i32,
    pub start_month: u32,
    pub total_months: u32,
}

impl SprintConfig {
    pub fn new(start_year: i32, start_month: u32, total_months: u32) -> Self {
        Self {
            start_year,
            start_month,
            total_months,
        }
    }

    /// First month of the sprint
    pub fn start(&self) -> YearMonth {
        YearMonth {
            year: self.start_year,
            month: self.start_month.clamp(1, 12),
        }
    }

    /// Sprint length, never below one month
    pub fn months(&self) -> u32 {
        self.total_months.max(1)
    }

    /// Last month of the sprint
    pub fn end(&self) -> YearMonth {
        self.start().plus_months(self.months() - 1)
    }
}

/// Sprint window plus the team-wide primary revenue target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SprintSettings {
    pub sprint: SprintConfig,
    pub total_target: f64,
}
