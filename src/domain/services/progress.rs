//! Progress and pacing
//!
//! Percentages are returned raw. They are never clamped, so over-achievement
//! shows up as values above 100.

use serde::Serialize;

use crate::domain::value_objects::PacingTier;

/// `revenue / target * 100`, or 0 when the target is not positive
pub fn overall_progress(revenue: f64, target: f64) -> f64 {
    if target > 0.0 {
        (revenue / target) * 100.0
    } else {
        0.0
    }
}

/// Even share of `target` for a single sprint month
pub fn monthly_target(target: f64, total_months: u32) -> f64 {
    target / f64::from(total_months.max(1))
}

/// Revenue against where it should be by the current month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pacing {
    pub monthly_pace: f64,
    pub expected_to_date: f64,
    pub percentage: f64,
    pub tier: PacingTier,
}

/// Compare `revenue` against a linear ramp towards `target`
///
/// When nothing is expected yet (zero target), any positive revenue counts
/// as fully on pace and zero revenue as 0%.
pub fn pacing(revenue: f64, target: f64, total_months: u32, current_month: u32) -> Pacing {
    let monthly_pace = monthly_target(target, total_months);
    let expected_to_date = monthly_pace * f64::from(current_month);

    let percentage = if expected_to_date > 0.0 {
        (revenue / expected_to_date) * 100.0
    } else if revenue > 0.0 {
        100.0
    } else {
        0.0
    };

    Pacing {
        monthly_pace,
        expected_to_date,
        percentage,
        tier: PacingTier::classify(percentage),
    }
}
