//! Revenue aggregation
//!
//! Sums and counts over revenue entries. Amounts are summed at full
//! precision; rounding belongs to whoever displays the number.

use serde::Serialize;

use crate::domain::entities::{Founder, RevenueEntry, RevenueSource};
use crate::domain::value_objects::{SprintConfig, YearMonth};

use super::calendar;

/// Predicate over revenue entries. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevenueFilter {
    pub source: Option<RevenueSource>,
    pub founder_id: Option<u64>,
    pub month: Option<YearMonth>,
}

impl RevenueFilter {
    /// Entries of one revenue stream
    pub fn source(source: RevenueSource) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    /// Restrict to one founder
    pub fn founder(mut self, founder_id: u64) -> Self {
        self.founder_id = Some(founder_id);
        self
    }

    /// Restrict to entries dated within `month`
    pub fn in_month(mut self, month: YearMonth) -> Self {
        self.month = Some(month);
        self
    }

    pub fn matches(&self, entry: &RevenueEntry) -> bool {
        if self.source.is_some_and(|s| s != entry.source) {
            return false;
        }
        if self.founder_id.is_some_and(|id| id != entry.founder_id) {
            return false;
        }
        match self.month {
            Some(month) => entry.year_month() == Some(month),
            None => true,
        }
    }
}

/// Sum of amounts over entries matching `filter`; 0 when nothing matches
pub fn total<'a, I>(entries: I, filter: &RevenueFilter) -> f64
where
    I: IntoIterator<Item = &'a RevenueEntry>,
{
    let mut sum = 0.0;
    for entry in entries {
        if filter.matches(entry) {
            sum += entry.amount;
        }
    }
    sum
}

/// Revenue for one stream, optionally for a single founder
pub fn revenue_total(
    entries: &[RevenueEntry],
    source: RevenueSource,
    founder_id: Option<u64>,
) -> f64 {
    let mut filter = RevenueFilter::source(source);
    filter.founder_id = founder_id;
    total(entries, &filter)
}

/// Number of secondary-mission entries flagged as a new customer
///
/// No deduplication: the same customer recorded twice counts twice.
pub fn new_customer_count(entries: &[RevenueEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.is_new_secondary_customer())
        .count()
}

/// Revenue for one stream within the calendar month of sprint month
/// `month_index`
pub fn monthly_revenue(
    entries: &[RevenueEntry],
    sprint: &SprintConfig,
    month_index: u32,
    source: RevenueSource,
) -> f64 {
    let month = calendar::month_at(sprint, month_index);
    total(entries, &RevenueFilter::source(source).in_month(month))
}

/// A founder's total revenue across every stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub founder_id: u64,
    pub name: String,
    pub revenue: f64,
}

/// Per-founder revenue across all streams, in founder order
///
/// Founders with no positive total are left out.
pub fn contributions(founders: &[Founder], entries: &[RevenueEntry]) -> Vec<Contribution> {
    founders
        .iter()
        .map(|founder| Contribution {
            founder_id: founder.id,
            name: founder.name.clone(),
            revenue: total(entries, &RevenueFilter::default().founder(founder.id)),
        })
        .filter(|c| c.revenue > 0.0)
        .collect()
}
