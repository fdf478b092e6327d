//! Domain Services
//!
//! The derivation engine: stateless functions from snapshot records to
//! percentages, pacing tiers and sums. No I/O, no logging, no errors.

pub mod aggregate;
pub mod allocation;
pub mod calendar;
pub mod progress;

pub use aggregate::{
    contributions, monthly_revenue, new_customer_count, revenue_total, Contribution,
    RevenueFilter,
};
pub use allocation::{allocated_target, find_assignment, founder_target, select_mission};
pub use calendar::{current_month, month_at};
pub use progress::{monthly_target, overall_progress, pacing, Pacing};
