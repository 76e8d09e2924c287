//! Recurring-payment detection over counterparty posting history.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::transaction::validate;
use crate::domain::{Frequency, RecurringKind, RecurringTransaction, Transaction};
use crate::errors::Result;

/// Relative deviation from the group average below which amounts count as
/// stable.
pub const AMOUNT_STABILITY_TOLERANCE: f64 = 0.10;
/// Nominal cadence lengths, in days.
pub const WEEKLY_INTERVAL_DAYS: f64 = 7.0;
pub const MONTHLY_INTERVAL_DAYS: f64 = 30.0;
pub const YEARLY_INTERVAL_DAYS: f64 = 365.0;
/// Half-widths of the interval bands around each nominal cadence. A mean
/// gap exactly on the edge falls outside the band.
pub const WEEKLY_BAND_DAYS: f64 = 2.0;
pub const MONTHLY_BAND_DAYS: f64 = 5.0;
pub const YEARLY_BAND_DAYS: f64 = 10.0;
/// Confidence for series with stable amounts, and for series recognized by
/// interval alone. A binary heuristic, not a statistical measure.
pub const STABLE_CONFIDENCE: f64 = 0.9;
pub const VARIABLE_CONFIDENCE: f64 = 0.7;
/// Minimum observations before amount stability can promote a series whose
/// spacing is irregular.
const STABLE_PROMOTION_MIN_OBSERVATIONS: usize = 3;

/// Category keywords marking a debit series as a household bill or
/// subscription. Debit series whose category matches none of these are
/// dropped outright: regular variable spending (groceries, fuel) must not
/// surface as recurring no matter how steady the amounts are.
pub const BILL_CATEGORY_KEYWORDS: &[&str] = &[
    "rent",
    "mortgage",
    "electricity",
    "gas",
    "heating",
    "water",
    "waste",
    "internet",
    "mobile",
    "phone",
    "insurance",
    "streaming",
    "subscription",
    "gym",
    "membership",
    "software",
    "app",
];

const SUBSCRIPTION_KEYWORDS: &[&str] = &["streaming", "subscription"];

/// Detects recurring payment series from transaction history.
pub struct RecurringService;

impl RecurringService {
    /// Groups transactions by counterparty, infers cadence from posting
    /// gaps, and classifies each kept series as income, bill, or
    /// subscription. Callers typically pass a 90-day window; the result is
    /// recomputed from scratch on every call.
    pub fn detect(transactions: &[Transaction]) -> Result<Vec<RecurringTransaction>> {
        validate(transactions)?;

        let mut groups: HashMap<&str, Vec<&Transaction>> = HashMap::new();
        for txn in transactions {
            groups.entry(txn.counterparty()).or_default().push(txn);
        }

        let mut detected = Vec::new();
        for (counterparty, mut group) in groups {
            // A single observation carries no cadence information.
            if group.len() < 2 {
                continue;
            }
            group.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));

            let avg_amount = group.iter().map(|t| t.amount).sum::<f64>() / group.len() as f64;
            let is_stable = is_stable_amount(&group, avg_amount);
            let frequency = classify_frequency(average_interval_days(&group));

            if frequency == Frequency::Irregular
                && !(is_stable && group.len() >= STABLE_PROMOTION_MIN_OBSERVATIONS)
            {
                continue;
            }

            let kind = match classify_kind(avg_amount, group[0].category_name.as_deref()) {
                Some(kind) => kind,
                None => continue,
            };

            let last_posted = group[0].posted_date();
            detected.push(RecurringTransaction {
                merchant_name: counterparty.to_string(),
                amount: avg_amount,
                frequency,
                next_expected_date: frequency.advance(last_posted),
                confidence: if is_stable {
                    STABLE_CONFIDENCE
                } else {
                    VARIABLE_CONFIDENCE
                },
                kind,
            });
        }

        // List order is not contractual; sorting keeps repeated calls on
        // identical input byte-identical.
        detected.sort_by(|a, b| a.merchant_name.cmp(&b.merchant_name));
        debug!(series = detected.len(), "recurring detection finished");
        Ok(detected)
    }
}

fn is_stable_amount(group: &[&Transaction], avg_amount: f64) -> bool {
    // Relative deviation is undefined around a zero average.
    if avg_amount == 0.0 {
        return false;
    }
    group
        .iter()
        .all(|t| ((t.amount - avg_amount) / avg_amount).abs() <= AMOUNT_STABILITY_TOLERANCE)
}

/// Mean gap in days between consecutive postings. Expects the group sorted
/// by `posted_at` descending and at least two entries.
fn average_interval_days(group: &[&Transaction]) -> f64 {
    let total: i64 = group
        .windows(2)
        .map(|pair| (pair[0].posted_at - pair[1].posted_at).num_days())
        .sum();
    total as f64 / (group.len() - 1) as f64
}

fn classify_frequency(avg_interval_days: f64) -> Frequency {
    if (avg_interval_days - WEEKLY_INTERVAL_DAYS).abs() < WEEKLY_BAND_DAYS {
        Frequency::Weekly
    } else if (avg_interval_days - MONTHLY_INTERVAL_DAYS).abs() < MONTHLY_BAND_DAYS {
        Frequency::Monthly
    } else if (avg_interval_days - YEARLY_INTERVAL_DAYS).abs() < YEARLY_BAND_DAYS {
        Frequency::Yearly
    } else {
        Frequency::Irregular
    }
}

/// Credits are income. Debits must carry a recognized bill category or the
/// series is discarded (`None`).
fn classify_kind(avg_amount: f64, category_name: Option<&str>) -> Option<RecurringKind> {
    if avg_amount > 0.0 {
        return Some(RecurringKind::Income);
    }
    let category = category_name?.to_lowercase();
    if !BILL_CATEGORY_KEYWORDS.iter().any(|kw| category.contains(kw)) {
        return None;
    }
    if SUBSCRIPTION_KEYWORDS.iter().any(|kw| category.contains(kw)) {
        Some(RecurringKind::Subscription)
    } else {
        Some(RecurringKind::Bill)
    }
}
