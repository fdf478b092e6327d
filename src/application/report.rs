//! Report use case
//!
//! Fetches a fresh snapshot from the configured source on every call and
//! derives the requested view from it. Nothing is cached between calls.

use tracing::debug;

use super::dashboard::{
    build_founder_dashboard, build_team_dashboard, DashboardOptions, FounderDashboard,
    SprintPosition, TeamDashboard,
};
use super::feed::{build_feed, TeamFeed};
use super::summary::NotificationSummary;
use crate::domain::entities::Snapshot;
use crate::domain::ports::SnapshotSource;
use crate::error::MissionResult;

pub struct ReportUseCase<S: SnapshotSource> {
    source: S,
    options: DashboardOptions,
}

impl<S: SnapshotSource> ReportUseCase<S> {
    pub fn new(source: S, options: DashboardOptions) -> Self {
        Self { source, options }
    }

    fn snapshot(&self) -> MissionResult<Snapshot> {
        debug!(source = %self.source.describe(), "fetching snapshot");
        self.source.load()
    }

    pub fn team(&self) -> MissionResult<TeamDashboard> {
        let snapshot = self.snapshot()?;
        let team = build_team_dashboard(&snapshot, &self.options);
        if team.secondary.is_none() {
            debug!(selector = %self.options.mission, "no secondary mission matched");
        }
        Ok(team)
    }

    /// Founder view by numeric id or name
    pub fn founder(&self, query: &str) -> MissionResult<FounderDashboard> {
        let snapshot = self.snapshot()?;
        let founder = snapshot.find_founder(query)?;
        Ok(build_founder_dashboard(&snapshot, founder, &self.options))
    }

    pub fn summary(&self) -> MissionResult<NotificationSummary> {
        self.team().map(|team| NotificationSummary::from_team(&team))
    }

    pub fn feed(&self) -> MissionResult<TeamFeed> {
        let snapshot = self.snapshot()?;
        Ok(build_feed(&snapshot))
    }

    pub fn position(&self) -> MissionResult<SprintPosition> {
        let snapshot = self.snapshot()?;
        Ok(SprintPosition::resolve(
            &snapshot.settings.sprint,
            self.options.today,
        ))
    }
}
