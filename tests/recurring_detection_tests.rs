mod common;

use chrono::Duration;
use insight_core::core::services::RecurringService;
use insight_core::domain::{Frequency, RecurringKind};
use uuid::Uuid;

use common::{merchant_series, posting, reference};

#[test]
fn netflix_history_yields_one_monthly_subscription() {
    let txns = merchant_series(
        "Netflix",
        Uuid::new_v4(),
        "Streaming Services",
        &[(-15.99, 30), (-15.99, 60), (-15.99, 90)],
    );
    let detected = RecurringService::detect(&txns).unwrap();

    assert_eq!(detected.len(), 1);
    let series = &detected[0];
    assert_eq!(series.merchant_name, "Netflix");
    assert_eq!(series.frequency, Frequency::Monthly);
    assert_eq!(series.kind, RecurringKind::Subscription);
    assert_eq!(series.confidence, 0.9);
}

#[test]
fn grocery_runs_never_surface_as_recurring() {
    // Five visits, stable amounts, irregular spacing: groceries is not a
    // recognized bill category, so the series must be dropped.
    let txns = merchant_series(
        "Tesco Ireland",
        Uuid::new_v4(),
        "Groceries",
        &[(-42.0, 3), (-42.0, 17), (-42.0, 26), (-42.0, 44), (-42.0, 71)],
    );
    assert!(RecurringService::detect(&txns).unwrap().is_empty());
}

#[test]
fn weekly_grocery_cadence_is_still_gated_by_category() {
    // Even a clean weekly cadence cannot bypass the keyword gate.
    let txns = merchant_series(
        "Tesco Ireland",
        Uuid::new_v4(),
        "Groceries",
        &[(-75.0, 0), (-75.0, 7), (-75.0, 14), (-75.0, 21)],
    );
    assert!(RecurringService::detect(&txns).unwrap().is_empty());
}

#[test]
fn every_group_in_the_output_has_at_least_two_observations() {
    let utility = Uuid::new_v4();
    let mut txns = merchant_series(
        "Electric Ireland",
        utility,
        "Electricity",
        &[(-95.0, 10), (-101.0, 40)],
    );
    // Lone postings across several merchants.
    txns.push(posting(3, "one-off shop", -25.0));
    txns.push(posting(9, "another one-off", -13.0));
    let detected = RecurringService::detect(&txns).unwrap();

    assert_eq!(detected.len(), 1);
    assert_eq!(detected[0].merchant_name, "Electric Ireland");
}

#[test]
fn next_expected_date_advances_by_the_detected_cadence() {
    let txns = merchant_series(
        "Irish Life",
        Uuid::new_v4(),
        "Insurance",
        &[(-210.0, 5), (-210.0, 370)],
    );
    let detected = RecurringService::detect(&txns).unwrap();

    assert_eq!(detected.len(), 1);
    assert_eq!(detected[0].frequency, Frequency::Yearly);
    let last_posted = (reference() - Duration::days(5)).date_naive();
    assert_eq!(
        detected[0].next_expected_date,
        Frequency::Yearly.advance(last_posted)
    );
}

#[test]
fn debit_series_without_any_category_is_dropped() {
    let txns: Vec<_> = [(-55.0, 2), (-55.0, 32), (-55.0, 61)]
        .iter()
        .map(|&(amount, days_ago)| posting(days_ago, "standing order", amount).with_merchant("Unknown SO"))
        .collect();
    assert!(RecurringService::detect(&txns).unwrap().is_empty());
}
