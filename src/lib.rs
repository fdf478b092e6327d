//! Mission Control - revenue progress and pacing engine
//!
//! Turns a snapshot of founders, revenue entries and secondary-mission
//! assignments into the progress percentages, pacing tiers and monthly
//! roll-ups shown on the founders' dashboard and sent in progress updates.
//!
//! The engine (`domain::services`) is pure: it never performs I/O, never
//! mutates its input and never fails on well-typed input.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    DashboardOptions, FounderDashboard, NotificationSummary, ReportUseCase, TeamDashboard,
    TeamFeed,
};
pub use config::{Config, OutputFormat};
pub use domain::entities::{
    Founder, MissionAssignment, Post, PostKind, RevenueEntry, RevenueSource, SecondaryMission,
    Snapshot,
};
pub use domain::services::{
    current_month, founder_target, monthly_revenue, new_customer_count, overall_progress, pacing,
    revenue_total, select_mission, Pacing,
};
pub use domain::value_objects::{
    MissionSelector, PacingTier, SprintConfig, SprintSettings, YearMonth,
};
pub use error::{MissionError, MissionResult};
pub use infrastructure::{InMemorySnapshot, JsonSnapshotFile};
