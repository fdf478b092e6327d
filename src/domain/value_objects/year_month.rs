//! Calendar month value object
//!
//! Month arithmetic for the sprint window. Days never matter here: two dates
//! in the same (year, month) are the same month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month (year + month 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Create a month, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Signed number of months from `earlier` to `self`
    ///
    /// `2024-05`.months_since(`2024-03`) is 2; the result is negative when
    /// `earlier` is actually later.
    pub fn months_since(self, earlier: YearMonth) -> i64 {
        (i64::from(self.year) - i64::from(earlier.year)) * 12
            + (i64::from(self.month) - i64::from(earlier.month))
    }

    /// The month `months` months after this one, rolling over year ends
    pub fn plus_months(self, months: u32) -> Self {
        let absolute = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        Self {
            year: absolute.div_euclid(12) as i32,
            month: absolute.rem_euclid(12) as u32 + 1,
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
