//! Scenario: Weekly Team Update
//!
//! Journey: A script builds the weekly progress notification from the
//! snapshot export, then the team reviews wins and blockers.
//!
//! Steps:
//! 1. `mission-control month` to confirm where in the sprint we are
//! 2. `mission-control summary --json` for the notification payload
//! 3. `mission-control feed` for the posts
//!
//! Success Criteria:
//! - The payload carries raw, unrounded figures
//! - Secondary figures use the full mission target
//! - Posts by departed founders still show, attributed to "Unknown"

use crate::common::*;

/// SCENARIO: month, summary and feed for a team mid-sprint
#[test]
fn scenario_weekly_update_journey() {
    let env = TestEnv::builder().with_snapshot(TEAM_SNAPSHOT).build();

    // Step 1: where are we?
    let result = env.run(&["month", "--today", "2024-04-15"]);
    assert!(result.success, "month failed:\n{}", result.combined_output());
    assert!(
        result.stdout.contains("month 2 of 4 (2024-04)"),
        "Step 1: should report month 2.\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("Sprint runs 2024-03 to 2024-06"));

    // Step 2: notification payload
    let result = env.run(&["summary", "--json", "--today", "2024-04-15"]);
    assert!(result.success, "summary failed:\n{}", result.combined_output());
    let summary = result.json();

    assert_eq!(summary["current_month"], 2);
    assert_eq!(summary["total_months"], 4);
    assert_eq!(summary["primary_revenue"], 5000.0);
    assert_eq!(summary["total_target"], 20000.0);
    assert_eq!(summary["primary_progress"], 25.0);
    assert_eq!(summary["this_month_primary_revenue"], 1000.0);
    assert_eq!(summary["this_month_primary_target"], 5000.0);
    assert_eq!(summary["this_month_primary_progress"], 20.0);

    let secondary = &summary["secondary"];
    assert_eq!(secondary["mission_name"], "Echodeck Growth");
    assert_eq!(secondary["target_arr"], 100000.0);
    assert_eq!(secondary["revenue"], 10000.0);
    assert_eq!(secondary["arr_progress"], 10.0);
    assert_eq!(secondary["new_customers"], 1);
    assert_eq!(secondary["target_customers"], 20);
    assert_eq!(secondary["this_month_revenue"], 6000.0);
    assert_eq!(secondary["this_month_target"], 25000.0);
    assert_eq!(secondary["this_month_progress"], 24.0);

    // Step 3: the feed
    let result = env.run(&["feed"]);
    assert!(result.success, "feed failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("Wins (1)"), "{}", result.stdout);
    assert!(result.stdout.contains("Ada: Closed the Acme pilot"));
    assert!(result.stdout.contains("Blockers (1)"));
    assert!(result.stdout.contains("Unknown: Waiting on legal"));
}

/// SCENARIO: a sprint that ran past its last month keeps counting
#[test]
fn scenario_overrun_sprint_is_flagged() {
    let env = TestEnv::builder().with_snapshot(TEAM_SNAPSHOT).build();

    let result = env.run(&["month", "--today", "2024-09-01"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("month 7 of 4 (2024-09)"), "{}", result.stdout);
    assert!(result.stdout.contains("sprint overrun"), "{}", result.stdout);
}
