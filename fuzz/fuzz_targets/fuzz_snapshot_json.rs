#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use mission_control::application::{build_feed, build_founder_dashboard, build_team_dashboard};
use mission_control::config::SprintOverrides;
use mission_control::infrastructure::SnapshotDocument;
use mission_control::DashboardOptions;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = serde_json::from_str::<SnapshotDocument>(content) else {
        return;
    };
    // Any snapshot that loads must derive every view without panicking
    let Ok(snapshot) = document.into_snapshot(&SprintOverrides::default()) else {
        return;
    };
    let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 15) else {
        return;
    };
    let options = DashboardOptions::new(today);

    let _ = build_team_dashboard(&snapshot, &options);
    for founder in &snapshot.founders {
        let _ = build_founder_dashboard(&snapshot, founder, &options);
    }
    let _ = build_feed(&snapshot);
});
