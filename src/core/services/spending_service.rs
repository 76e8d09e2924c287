//! Per-category spending aggregation and month-over-month trend.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::transaction::validate;
use crate::domain::{SpendingPattern, Transaction, Trend};
use crate::errors::Result;

/// Nominal month length used to convert an observed span into months.
const DAYS_PER_MONTH: f64 = 30.0;
/// Trailing window compared against the long-run monthly average.
const TRAILING_WINDOW_DAYS: i64 = 30;
/// Trailing spend above `average * 1.1` reads as increasing, below
/// `average * 0.9` as decreasing.
pub const INCREASING_RATIO: f64 = 1.1;
pub const DECREASING_RATIO: f64 = 0.9;
/// Dispersion is not computed yet; every pattern carries this placeholder.
const PLACEHOLDER_VOLATILITY: f64 = 0.5;

/// Aggregates expense history into per-category spending patterns.
pub struct SpendingService;

impl SpendingService {
    /// Builds one pattern per category that has expense activity. Income
    /// postings and uncategorized expenses contribute nothing. `reference`
    /// is the injected "now" anchoring the trailing-month comparison; it
    /// must come from the same time source the cash-flow calculator uses.
    pub fn analyze(
        transactions: &[Transaction],
        categories: &HashMap<Uuid, String>,
        reference: DateTime<Utc>,
    ) -> Result<Vec<SpendingPattern>> {
        validate(transactions)?;

        let mut groups: HashMap<Uuid, Vec<&Transaction>> = HashMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            if let Some(category_id) = txn.category_id {
                groups.entry(category_id).or_default().push(txn);
            }
        }

        let cutoff = reference - Duration::days(TRAILING_WINDOW_DAYS);
        let mut patterns: Vec<SpendingPattern> = groups
            .into_iter()
            .map(|(category_id, group)| {
                let total_spent: f64 = group.iter().map(|t| t.abs_amount()).sum();
                let span_days = observed_span_days(&group);
                // Floor at one month so a single burst of postings does not
                // divide by zero or inflate the average.
                let months = (span_days as f64 / DAYS_PER_MONTH).max(1.0);
                let average_monthly_spend = total_spent / months;
                let last_month_spend: f64 = group
                    .iter()
                    .filter(|t| t.posted_at >= cutoff)
                    .map(|t| t.abs_amount())
                    .sum();
                let category_name = categories
                    .get(&category_id)
                    .cloned()
                    .or_else(|| group.iter().find_map(|t| t.category_name.clone()))
                    .unwrap_or_else(|| "Unknown".to_string());

                SpendingPattern {
                    category_id,
                    category_name,
                    average_monthly_spend,
                    trend: classify_trend(average_monthly_spend, last_month_spend),
                    last_month_spend,
                    volatility: PLACEHOLDER_VOLATILITY,
                }
            })
            .collect();

        // Deterministic order for identical input; not part of the contract.
        patterns.sort_by(|a, b| {
            a.category_name
                .cmp(&b.category_name)
                .then(a.category_id.cmp(&b.category_id))
        });
        Ok(patterns)
    }
}

fn observed_span_days(group: &[&Transaction]) -> i64 {
    let first = group.iter().map(|t| t.posted_at).min();
    let last = group.iter().map(|t| t.posted_at).max();
    match (first, last) {
        (Some(first), Some(last)) => (last - first).num_days(),
        _ => 0,
    }
}

fn classify_trend(average_monthly_spend: f64, last_month_spend: f64) -> Trend {
    if last_month_spend > average_monthly_spend * INCREASING_RATIO {
        Trend::Increasing
    } else if last_month_spend < average_monthly_spend * DECREASING_RATIO {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}
