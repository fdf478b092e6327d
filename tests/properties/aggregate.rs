//! Property tests for revenue aggregation.

use proptest::prelude::*;

use mission_control::domain::entities::{RevenueEntry, RevenueSource};
use mission_control::domain::services::{monthly_revenue, new_customer_count, revenue_total};
use mission_control::domain::value_objects::SprintConfig;

fn source() -> impl Strategy<Value = RevenueSource> {
    prop_oneof![Just(RevenueSource::Primary), Just(RevenueSource::Secondary)]
}

fn entry() -> impl Strategy<Value = RevenueEntry> {
    (
        1u64..=4,
        0u32..50_000,
        2023i32..=2025,
        1u32..=12,
        1u32..=28,
        source(),
        any::<bool>(),
    )
        .prop_map(|(founder_id, amount, year, month, day, source, is_new_customer)| RevenueEntry {
            id: 0,
            founder_id,
            amount: f64::from(amount),
            date: format!("{:04}-{:02}-{:02}", year, month, day),
            description: None,
            source,
            is_new_customer,
        })
}

fn entries() -> impl Strategy<Value = Vec<RevenueEntry>> {
    proptest::collection::vec(entry(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: totals do not depend on record order.
    #[test]
    fn property_totals_ignore_order(list in entries(), src in source()) {
        let mut reversed = list.clone();
        reversed.reverse();
        prop_assert_eq!(
            revenue_total(&list, src, None),
            revenue_total(&reversed, src, None)
        );
        prop_assert_eq!(new_customer_count(&list), new_customer_count(&reversed));
    }

    /// PROPERTY: per-founder totals partition the team total.
    #[test]
    fn property_founder_totals_sum_to_team(list in entries(), src in source()) {
        let team = revenue_total(&list, src, None);
        let by_founder: f64 = (1u64..=4).map(|id| revenue_total(&list, src, Some(id))).sum();
        prop_assert!((team - by_founder).abs() < 1e-6);
    }

    /// PROPERTY: both streams together account for every entry.
    #[test]
    fn property_streams_cover_everything(list in entries()) {
        let all: f64 = list.iter().map(|e| e.amount).sum();
        let split = revenue_total(&list, RevenueSource::Primary, None)
            + revenue_total(&list, RevenueSource::Secondary, None);
        prop_assert!((all - split).abs() < 1e-6);
    }

    /// PROPERTY: new customers are exactly the flagged secondary entries.
    #[test]
    fn property_new_customers_only_secondary(list in entries()) {
        let expected = list
            .iter()
            .filter(|e| e.source == RevenueSource::Secondary && e.is_new_customer)
            .count();
        prop_assert_eq!(new_customer_count(&list), expected);
    }

    /// PROPERTY: monthly sums over a whole sprint never exceed the stream total.
    #[test]
    fn property_months_bounded_by_total(list in entries(), src in source(), total in 1u32..=12) {
        let sprint = SprintConfig::new(2024, 1, total);
        let months: f64 = (1..=total).map(|m| monthly_revenue(&list, &sprint, m, src)).sum();
        prop_assert!(months <= revenue_total(&list, src, None) + 1e-6);
    }
}
