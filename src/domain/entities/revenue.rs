//! Revenue entry entity
//!
//! Entries are recorded facts. Their `date` is kept as the raw calendar-date
//! string from the data source; an entry whose date does not parse simply
//! fails every month-based filter instead of being rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::YearMonth;

/// Revenue stream an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueSource {
    /// Core services revenue, tracked against founder and team targets
    #[serde(alias = "Primary")]
    Primary,
    /// Revenue for the secondary mission (ARR and new customers)
    #[serde(alias = "Secondary")]
    Secondary,
}

impl std::fmt::Display for RevenueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevenueSource::Primary => write!(f, "primary"),
            RevenueSource::Secondary => write!(f, "secondary"),
        }
    }
}

/// A single recorded amount of revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub id: u64,
    pub founder_id: u64,
    /// Signed amount; negative values are corrections
    pub amount: f64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: RevenueSource,
    /// Only meaningful for secondary-mission revenue
    #[serde(default)]
    pub is_new_customer: bool,
}

impl RevenueEntry {
    /// Parsed calendar date, if the raw date is well-formed
    ///
    /// Accepts a bare date or a timestamp that starts with one.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        let head = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }

    /// Month the entry was recorded in
    pub fn year_month(&self) -> Option<YearMonth> {
        self.calendar_date().map(YearMonth::of)
    }

    /// Secondary-mission entry flagged as a new customer
    pub fn is_new_secondary_customer(&self) -> bool {
        self.source == RevenueSource::Secondary && self.is_new_customer
    }
}
