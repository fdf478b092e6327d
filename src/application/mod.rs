//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns engine outputs into view models for the renderers
//!
//! ## Use Cases
//!
//! - `ReportUseCase` - Fetches a snapshot and builds the requested view
//!
//! ## View Models
//!
//! - `TeamDashboard` / `FounderDashboard` - Everything a dashboard view shows
//! - `NotificationSummary` - Team figures for the chat notification
//! - `TeamFeed` - Wins and blockers

pub mod dashboard;
pub mod feed;
pub mod report;
pub mod summary;

pub use dashboard::{
    build_founder_dashboard, build_team_dashboard, DashboardOptions, FounderDashboard,
    FounderMission, FounderStream, MonthFigures, SprintPosition, TeamDashboard, TeamMission,
    TeamStream,
};
pub use feed::{build_feed, FeedItem, TeamFeed};
pub use report::ReportUseCase;
pub use summary::{NotificationSummary, SecondarySummary};
