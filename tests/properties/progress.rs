//! Property tests for progress and pacing.

use proptest::prelude::*;

use mission_control::domain::services::{overall_progress, pacing};
use mission_control::domain::value_objects::PacingTier;

fn amount() -> impl Strategy<Value = f64> {
    (0u32..5_000_000).prop_map(f64::from)
}

fn positive_target() -> impl Strategy<Value = f64> {
    (1u32..5_000_000).prop_map(f64::from)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: progress is exactly revenue / target * 100, with no clamping.
    #[test]
    fn property_progress_is_unclamped_ratio(revenue in amount(), target in positive_target()) {
        let progress = overall_progress(revenue, target);
        prop_assert!((progress - revenue / target * 100.0).abs() < 1e-9);
        prop_assert!(progress >= 0.0);
    }

    /// PROPERTY: a non-positive target always yields 0%, whatever the revenue.
    #[test]
    fn property_zero_target_is_zero_progress(revenue in amount(), target in -1000i32..=0) {
        prop_assert_eq!(overall_progress(revenue, f64::from(target)), 0.0);
    }

    /// PROPERTY: expected-to-date grows linearly with the month index.
    #[test]
    fn property_expected_is_linear_ramp(
        target in positive_target(),
        total in 1u32..=24,
        current in 1u32..=36,
    ) {
        let result = pacing(0.0, target, total, current);
        let expected = target / f64::from(total) * f64::from(current);
        prop_assert!((result.expected_to_date - expected).abs() < 1e-6);
        prop_assert!((result.monthly_pace - target / f64::from(total)).abs() < 1e-9);
    }

    /// PROPERTY: the tier always agrees with the percentage thresholds.
    #[test]
    fn property_tier_matches_thresholds(
        revenue in amount(),
        target in positive_target(),
        total in 1u32..=24,
        current in 1u32..=24,
    ) {
        let result = pacing(revenue, target, total, current);
        let tier = if result.percentage >= 100.0 {
            PacingTier::OnPace
        } else if result.percentage >= 80.0 {
            PacingTier::NearPace
        } else {
            PacingTier::BehindPace
        };
        prop_assert_eq!(result.tier, tier);
    }

    /// PROPERTY: with nothing expected yet, any revenue is on pace and none is 0%.
    #[test]
    fn property_zero_expected_pacing(
        revenue in amount(),
        total in 1u32..=24,
        current in 1u32..=24,
    ) {
        let result = pacing(revenue, 0.0, total, current);
        if revenue > 0.0 {
            prop_assert_eq!(result.percentage, 100.0);
            prop_assert_eq!(result.tier, PacingTier::OnPace);
        } else {
            prop_assert_eq!(result.percentage, 0.0);
            prop_assert_eq!(result.tier, PacingTier::BehindPace);
        }
    }

    /// PROPERTY: more revenue never lowers the pacing percentage.
    #[test]
    fn property_pacing_monotone_in_revenue(
        low in amount(),
        extra in amount(),
        target in positive_target(),
        total in 1u32..=24,
        current in 1u32..=24,
    ) {
        let a = pacing(low, target, total, current);
        let b = pacing(low + extra, target, total, current);
        prop_assert!(b.percentage >= a.percentage);
    }
}
