//! Dashboard view models
//!
//! Assembles everything the team and founder views show from one snapshot.
//! All numbers are raw: formatting, rounding and bar clamping are left to the
//! renderers.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Founder, RevenueEntry, RevenueSource, Snapshot};
use crate::domain::services::{self, Contribution, Pacing};
use crate::domain::value_objects::{MissionSelector, SprintConfig, YearMonth};

/// Inputs that are not part of the snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    /// Reference date for the current sprint month
    pub today: NaiveDate,
    /// Which secondary mission to follow
    pub mission: MissionSelector,
}

impl DashboardOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            mission: MissionSelector::default(),
        }
    }

    pub fn with_mission(mut self, mission: MissionSelector) -> Self {
        self.mission = mission;
        self
    }
}

/// Where in the sprint the reference date falls
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SprintPosition {
    pub current_month: u32,
    pub total_months: u32,
    pub calendar_month: YearMonth,
    pub start: YearMonth,
    pub end: YearMonth,
}

impl SprintPosition {
    pub fn resolve(sprint: &SprintConfig, today: NaiveDate) -> Self {
        let current_month = services::current_month(sprint, today);
        Self {
            current_month,
            total_months: sprint.months(),
            calendar_month: services::month_at(sprint, current_month),
            start: sprint.start(),
            end: sprint.end(),
        }
    }

    /// The reference date lies past the last sprint month
    pub fn is_overrun(&self) -> bool {
        self.current_month > self.total_months
    }
}

/// One calendar month's revenue against an even monthly share of the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthFigures {
    pub month: YearMonth,
    pub revenue: f64,
    pub target: f64,
    pub progress: f64,
}

/// Team-wide figures for one revenue stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStream {
    pub revenue: f64,
    pub target: f64,
    pub progress: f64,
    pub pacing: Pacing,
    pub this_month: MonthFigures,
}

/// Team-wide secondary mission figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMission {
    pub mission_id: u64,
    pub name: String,
    pub description: String,
    pub stream: TeamStream,
    pub new_customers: usize,
    pub target_customers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDashboard {
    pub position: SprintPosition,
    pub primary: TeamStream,
    pub secondary: Option<TeamMission>,
    pub contributions: Vec<Contribution>,
}

/// One founder's figures for one revenue stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FounderStream {
    pub revenue: f64,
    pub target: f64,
    pub progress: f64,
    pub pacing: Pacing,
}

/// A founder's share of the secondary mission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FounderMission {
    pub mission_id: u64,
    pub name: String,
    pub share_percentage: f64,
    pub stream: FounderStream,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FounderDashboard {
    pub founder_id: u64,
    pub name: String,
    pub position: SprintPosition,
    pub primary: FounderStream,
    /// Absent when no mission is selected or the founder holds no share
    pub secondary: Option<FounderMission>,
    /// The founder's entries, newest first
    pub entries: Vec<RevenueEntry>,
}

fn team_stream(
    snapshot: &Snapshot,
    position: &SprintPosition,
    source: RevenueSource,
    target: f64,
) -> TeamStream {
    let sprint = &snapshot.settings.sprint;
    let revenue = services::revenue_total(&snapshot.revenue, source, None);
    let month_revenue =
        services::monthly_revenue(&snapshot.revenue, sprint, position.current_month, source);
    let month_target = services::monthly_target(target, position.total_months);

    TeamStream {
        revenue,
        target,
        progress: services::overall_progress(revenue, target),
        pacing: services::pacing(revenue, target, position.total_months, position.current_month),
        this_month: MonthFigures {
            month: position.calendar_month,
            revenue: month_revenue,
            target: month_target,
            progress: services::overall_progress(month_revenue, month_target),
        },
    }
}

fn founder_stream(
    snapshot: &Snapshot,
    position: &SprintPosition,
    founder_id: u64,
    source: RevenueSource,
    target: f64,
) -> FounderStream {
    let revenue = services::revenue_total(&snapshot.revenue, source, Some(founder_id));
    FounderStream {
        revenue,
        target,
        progress: services::overall_progress(revenue, target),
        pacing: services::pacing(revenue, target, position.total_months, position.current_month),
    }
}

/// Team view: both streams, the secondary mission and per-founder totals
pub fn build_team_dashboard(snapshot: &Snapshot, options: &DashboardOptions) -> TeamDashboard {
    let position = SprintPosition::resolve(&snapshot.settings.sprint, options.today);

    let primary = team_stream(
        snapshot,
        &position,
        RevenueSource::Primary,
        snapshot.settings.total_target,
    );

    let secondary = services::select_mission(&snapshot.missions, &options.mission).map(|mission| {
        TeamMission {
            mission_id: mission.id,
            name: mission.name.clone(),
            description: mission.description.clone(),
            stream: team_stream(
                snapshot,
                &position,
                RevenueSource::Secondary,
                mission.target_arr,
            ),
            new_customers: services::new_customer_count(&snapshot.revenue),
            target_customers: mission.target_customers,
        }
    });

    TeamDashboard {
        position,
        primary,
        secondary,
        contributions: services::contributions(&snapshot.founders, &snapshot.revenue),
    }
}

/// Founder view: personal target, pacing and (if assigned) mission share
pub fn build_founder_dashboard(
    snapshot: &Snapshot,
    founder: &Founder,
    options: &DashboardOptions,
) -> FounderDashboard {
    let position = SprintPosition::resolve(&snapshot.settings.sprint, options.today);

    let primary = founder_stream(
        snapshot,
        &position,
        founder.id,
        RevenueSource::Primary,
        founder.target,
    );

    let secondary = services::select_mission(&snapshot.missions, &options.mission).and_then(
        |mission| {
            let assignment =
                services::find_assignment(&snapshot.assignments, founder.id, mission)?;
            let target = services::allocated_target(mission, assignment);
            Some(FounderMission {
                mission_id: mission.id,
                name: mission.name.clone(),
                share_percentage: assignment.share_percentage,
                stream: founder_stream(
                    snapshot,
                    &position,
                    founder.id,
                    RevenueSource::Secondary,
                    target,
                ),
            })
        },
    );

    let entries = snapshot
        .revenue
        .iter()
        .filter(|e| e.founder_id == founder.id)
        .cloned()
        .collect();

    FounderDashboard {
        founder_id: founder.id,
        name: founder.name.clone(),
        position,
        primary,
        secondary,
        entries,
    }
}
