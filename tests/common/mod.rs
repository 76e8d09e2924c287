use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use insight_core::domain::Transaction;
use uuid::Uuid;

/// Fixed reference instant shared by the integration suites so trailing
/// windows are deterministic.
pub fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Builds one posting `days_ago` before the reference instant.
pub fn posting(days_ago: i64, description: &str, amount: f64) -> Transaction {
    Transaction::new(reference() - Duration::days(days_ago), description, amount)
}

/// Builds a categorized merchant series: one posting per `(amount,
/// days_ago)` pair, all under the same merchant and category.
pub fn merchant_series(
    merchant: &str,
    category_id: Uuid,
    category_name: &str,
    amounts_and_days: &[(f64, i64)],
) -> Vec<Transaction> {
    amounts_and_days
        .iter()
        .map(|&(amount, days_ago)| {
            posting(days_ago, &format!("{merchant} payment"), amount)
                .with_merchant(merchant)
                .with_category(category_id, category_name)
        })
        .collect()
}

/// Category lookup for the supplied `(id, name)` pairs.
pub fn category_lookup(entries: &[(Uuid, &str)]) -> HashMap<Uuid, String> {
    entries
        .iter()
        .map(|&(id, name)| (id, name.to_string()))
        .collect()
}
