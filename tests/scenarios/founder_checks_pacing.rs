//! Scenario: Founder Checks Their Pacing
//!
//! Journey: A founder opens their dashboard early in the sprint to see how
//! far along they are and whether they are keeping up.
//!
//! Success Criteria:
//! - Progress is revenue against the personal target
//! - Pacing compares against an even monthly ramp, never clamped
//! - A mission share only shows up for founders who hold one

use chrono::NaiveDate;

use mission_control::domain::entities::{
    Founder, MissionAssignment, RevenueEntry, RevenueSource, SecondaryMission, Snapshot,
};
use mission_control::domain::services::founder_target;
use mission_control::{
    DashboardOptions, InMemorySnapshot, MissionSelector, PacingTier, ReportUseCase,
    SprintConfig, SprintSettings,
};

use crate::common::*;

fn founder(id: u64, name: &str, target: f64) -> Founder {
    Founder {
        id,
        name: name.to_string(),
        target,
        access_key: String::new(),
    }
}

fn entry(id: u64, founder_id: u64, amount: f64, date: &str, source: RevenueSource) -> RevenueEntry {
    RevenueEntry {
        id,
        founder_id,
        amount,
        date: date.to_string(),
        description: None,
        source,
        is_new_customer: false,
    }
}

fn sprint_snapshot() -> Snapshot {
    let mut snapshot = Snapshot::new(SprintSettings {
        sprint: SprintConfig::new(2024, 3, 4),
        total_target: 20_000.0,
    });
    snapshot.founders = vec![founder(1, "Ada", 10_000.0), founder(2, "Grace", 10_000.0)];
    snapshot.revenue = vec![
        entry(1, 1, 4000.0, "2024-03-08", RevenueSource::Primary),
        entry(2, 1, 10_000.0, "2024-03-15", RevenueSource::Secondary),
    ];
    snapshot.missions = vec![SecondaryMission {
        id: 7,
        name: "Echodeck Growth".to_string(),
        description: String::new(),
        target_arr: 100_000.0,
        target_customers: 20,
    }];
    snapshot.assignments = vec![MissionAssignment {
        id: 1,
        founder_id: 1,
        mission_id: 7,
        share_percentage: 50.0,
    }];
    snapshot
}

fn reports(today: NaiveDate) -> ReportUseCase<InMemorySnapshot> {
    ReportUseCase::new(
        InMemorySnapshot::new(sprint_snapshot()),
        DashboardOptions::new(today).with_mission(MissionSelector::Keyword("echodeck".into())),
    )
}

/// SCENARIO: 4 000 € of 10 000 € in the first of four months
#[test]
fn scenario_founder_ahead_of_pace_in_month_one() {
    let view = reports(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
        .founder("Ada")
        .expect("Ada exists");

    assert_eq!(view.position.current_month, 1);
    assert_eq!(view.primary.progress, 40.0);
    assert_eq!(view.primary.pacing.expected_to_date, 2500.0);
    assert_eq!(view.primary.pacing.percentage, 160.0);
    assert_eq!(view.primary.pacing.tier, PacingTier::OnPace);
}

/// SCENARIO: the same revenue two months later has fallen behind
#[test]
fn scenario_same_revenue_falls_behind_later() {
    let view = reports(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
        .founder("1")
        .expect("founder 1 exists");

    assert_eq!(view.position.current_month, 3);
    assert_eq!(view.primary.pacing.expected_to_date, 7500.0);
    assert!((view.primary.pacing.percentage - 53.333).abs() < 0.01);
    assert_eq!(view.primary.pacing.tier, PacingTier::BehindPace);
    // overall progress does not depend on the month
    assert_eq!(view.primary.progress, 40.0);
}

/// SCENARIO: a 50% share of a 100 000 € mission
#[test]
fn scenario_mission_share_sets_personal_arr_target() {
    let snapshot = sprint_snapshot();
    assert_eq!(
        founder_target(&snapshot.missions[0], &snapshot.assignments, 1),
        Some(50_000.0)
    );

    let view = reports(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
        .founder("ada")
        .unwrap();
    let mission = view.secondary.expect("Ada holds a share");
    assert_eq!(mission.share_percentage, 50.0);
    assert_eq!(mission.stream.target, 50_000.0);
    assert_eq!(mission.stream.revenue, 10_000.0);
    assert_eq!(mission.stream.progress, 20.0);
}

/// SCENARIO: a founder without a share sees no mission figures
#[test]
fn scenario_founder_without_share_has_no_mission_target() {
    let snapshot = sprint_snapshot();
    assert_eq!(founder_target(&snapshot.missions[0], &snapshot.assignments, 2), None);

    let view = reports(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
        .founder("Grace")
        .unwrap();
    assert!(view.secondary.is_none());
    assert_eq!(view.primary.progress, 0.0);
    assert_eq!(view.primary.pacing.tier, PacingTier::BehindPace);
}

/// SCENARIO: the same journey through the CLI
#[test]
fn scenario_founder_dashboard_from_cli() {
    let env = TestEnv::builder().with_snapshot(TEAM_SNAPSHOT).build();

    let result = env.run(&["founder", "Ada", "--today", "2024-03-20"]);
    assert!(
        result.success,
        "founder should succeed.\nOutput:\n{}",
        result.combined_output()
    );

    let out = &result.stdout;
    assert!(out.contains("month 1 of 4 (2024-03)"), "heading:\n{}", out);
    assert!(out.contains("4.000 € / 10.000 € (40.0%)"), "primary:\n{}", out);
    assert!(out.contains("160.0% on-pace (expected 2.500 €)"), "pacing:\n{}", out);
    assert!(out.contains("Echodeck Growth (50.0% share)"), "mission:\n{}", out);
    assert!(out.contains("6.000 € / 50.000 € (12.0%)"), "mission figures:\n{}", out);
    assert!(out.contains("Entries (2)"), "entries:\n{}", out);
    assert!(out.contains("(new customer)"), "new customer marker:\n{}", out);
    assert!(!out.contains("ada-key"), "access key must never be printed");

    let result = env.run(&["founder", "Grace", "--today", "2024-03-20"]);
    assert!(result.success);
    assert!(!result.stdout.contains("share)"), "Grace holds no share:\n{}", result.stdout);
}
