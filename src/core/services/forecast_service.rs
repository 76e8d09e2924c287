//! Day-by-day balance projection with optimistic and pessimistic bands.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::transaction::validate;
use crate::domain::{
    DailySpendStats, ForecastPoint, RecurringKind, RecurringTransaction, Transaction,
};
use crate::errors::Result;

/// Default projection horizon.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;
/// Trailing window used when deriving daily spend statistics from history.
pub const DAILY_STATS_WINDOW_DAYS: i64 = 90;

/// Projects an account balance forward from recent spending behavior.
pub struct ForecastService;

impl ForecastService {
    /// Produces one point per day in `[0, horizon_days)`, starting at the
    /// calendar date of `reference`.
    ///
    /// Each day subtracts the variable-spend estimate (the optimistic band
    /// never assumes negative spending), then applies every recurring item
    /// whose `next_expected_date` lands on that exact date, identically to
    /// all three balances. Items fire once, on their single stored date;
    /// cadences that would repeat inside the horizon are not expanded.
    pub fn project(
        current_balance: f64,
        recurring: &[RecurringTransaction],
        daily_spend: DailySpendStats,
        horizon_days: u32,
        reference: DateTime<Utc>,
    ) -> Vec<ForecastPoint> {
        let start = reference.date_naive();
        let mut expected = current_balance;
        let mut optimistic = current_balance;
        let mut pessimistic = current_balance;
        let mut points = Vec::with_capacity(horizon_days as usize);

        for offset in 0..horizon_days {
            let date = start + Duration::days(offset as i64);
            expected -= daily_spend.mean;
            optimistic -= (daily_spend.mean - daily_spend.std_dev).max(0.0);
            pessimistic -= daily_spend.mean + daily_spend.std_dev;

            for item in recurring.iter().filter(|r| r.next_expected_date == date) {
                let effect = match item.kind {
                    RecurringKind::Income => item.amount,
                    RecurringKind::Bill | RecurringKind::Subscription => -item.amount.abs(),
                };
                expected += effect;
                optimistic += effect;
                pessimistic += effect;
            }

            points.push(ForecastPoint {
                date,
                expected_balance: round2(expected),
                optimistic_balance: round2(optimistic),
                pessimistic_balance: round2(pessimistic),
            });
        }

        points
    }

    /// Derives the daily variable-spend distribution callers feed into
    /// [`ForecastService::project`]: mean absolute expense per window day,
    /// with the population deviation of per-day expense totals. Days
    /// without spending count as zero-spend observations.
    pub fn daily_spend_stats(
        transactions: &[Transaction],
        window_days: i64,
        reference: DateTime<Utc>,
    ) -> Result<DailySpendStats> {
        validate(transactions)?;
        if window_days <= 0 {
            return Ok(DailySpendStats::default());
        }

        let cutoff = reference - Duration::days(window_days);
        let mut per_day: HashMap<NaiveDate, f64> = HashMap::new();
        let mut total = 0.0;
        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && t.posted_at >= cutoff)
        {
            *per_day.entry(txn.posted_date()).or_insert(0.0) += txn.abs_amount();
            total += txn.abs_amount();
        }

        let mean = total / window_days as f64;
        let mut sum_sq: f64 = per_day
            .values()
            .map(|daily| (daily - mean) * (daily - mean))
            .sum();
        let quiet_days = (window_days as usize).saturating_sub(per_day.len());
        sum_sq += quiet_days as f64 * mean * mean;

        Ok(DailySpendStats {
            mean,
            std_dev: (sum_sq / window_days as f64).sqrt(),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
