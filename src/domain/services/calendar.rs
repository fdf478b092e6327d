//! Sprint calendar
//!
//! Maps a reference date onto the sprint's 1-based month index and maps a
//! month index back onto a calendar month.

use chrono::NaiveDate;

use crate::domain::value_objects::{SprintConfig, YearMonth};

/// Whole calendar months elapsed since the sprint start, counting the start
/// month as month 1.
///
/// Any `today` at or before the start month resolves to 1. The index is not
/// capped at `total_months`; an overrun sprint keeps counting.
pub fn current_month(sprint: &SprintConfig, today: NaiveDate) -> u32 {
    let index = YearMonth::of(today).months_since(sprint.start()) + 1;
    u32::try_from(index.max(1)).unwrap_or(u32::MAX)
}

/// Calendar month of the given sprint month index (1 = start month)
///
/// An index of 0 is treated as 1.
pub fn month_at(sprint: &SprintConfig, month_index: u32) -> YearMonth {
    sprint.start().plus_months(month_index.saturating_sub(1))
}
