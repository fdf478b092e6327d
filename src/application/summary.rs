//! Notification summary
//!
//! The team-wide figures handed to the chat notification formatter. Message
//! layout and delivery live outside this crate; this is only the payload.

use serde::Serialize;

use super::dashboard::TeamDashboard;
use crate::domain::value_objects::YearMonth;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondarySummary {
    pub mission_name: String,
    pub target_arr: f64,
    pub target_customers: u32,
    pub revenue: f64,
    pub arr_progress: f64,
    pub new_customers: usize,
    pub this_month_revenue: f64,
    pub this_month_target: f64,
    pub this_month_progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationSummary {
    pub current_month: u32,
    pub total_months: u32,
    pub calendar_month: YearMonth,
    pub primary_revenue: f64,
    pub total_target: f64,
    pub primary_progress: f64,
    pub this_month_primary_revenue: f64,
    pub this_month_primary_target: f64,
    pub this_month_primary_progress: f64,
    /// Absent when no secondary mission is selected
    pub secondary: Option<SecondarySummary>,
}

impl NotificationSummary {
    pub fn from_team(team: &TeamDashboard) -> Self {
        let secondary = team.secondary.as_ref().map(|mission| SecondarySummary {
            mission_name: mission.name.clone(),
            target_arr: mission.stream.target,
            target_customers: mission.target_customers,
            revenue: mission.stream.revenue,
            arr_progress: mission.stream.progress,
            new_customers: mission.new_customers,
            this_month_revenue: mission.stream.this_month.revenue,
            this_month_target: mission.stream.this_month.target,
            this_month_progress: mission.stream.this_month.progress,
        });

        Self {
            current_month: team.position.current_month,
            total_months: team.position.total_months,
            calendar_month: team.position.calendar_month,
            primary_revenue: team.primary.revenue,
            total_target: team.primary.target,
            primary_progress: team.primary.progress,
            this_month_primary_revenue: team.primary.this_month.revenue,
            this_month_primary_target: team.primary.this_month.target,
            this_month_primary_progress: team.primary.this_month.progress,
            secondary,
        }
    }
}
