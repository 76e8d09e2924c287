//! Trailing-quarter cash-flow statistics.

use chrono::{DateTime, Utc};

use crate::domain::recurring::shift_month;
use crate::domain::transaction::validate;
use crate::domain::{CashFlowStats, Transaction};
use crate::errors::Result;

/// Calendar months aggregated into the averages. The divisor is fixed at
/// this value regardless of how much of the window the data covers.
const TRAILING_MONTHS: i32 = 3;

/// Computes income/expense averages and the savings rate.
pub struct CashFlowService;

impl CashFlowService {
    /// Aggregates postings from the trailing three calendar months of
    /// `reference`. Empty input yields all-zero stats, never an error.
    pub fn analyze(
        transactions: &[Transaction],
        reference: DateTime<Utc>,
    ) -> Result<CashFlowStats> {
        validate(transactions)?;

        let cutoff = shift_month(reference.date_naive(), -TRAILING_MONTHS);
        let mut income = 0.0;
        let mut expenses = 0.0;
        for txn in transactions.iter().filter(|t| t.posted_date() >= cutoff) {
            if txn.amount > 0.0 {
                income += txn.amount;
            } else {
                expenses += txn.amount.abs();
            }
        }

        let savings_rate = if income > 0.0 {
            (income - expenses) / income
        } else {
            0.0
        };

        Ok(CashFlowStats {
            average_monthly_income: income / TRAILING_MONTHS as f64,
            average_monthly_expenses: expenses / TRAILING_MONTHS as f64,
            savings_rate,
            days_until_broke: None,
            typical_low_balance: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn txn(days_ago: i64, amount: f64) -> Transaction {
        Transaction::new(reference() - Duration::days(days_ago), "posting", amount)
    }

    #[test]
    fn empty_input_yields_zero_stats() {
        let stats = CashFlowService::analyze(&[], reference()).unwrap();
        assert_eq!(stats.average_monthly_income, 0.0);
        assert_eq!(stats.average_monthly_expenses, 0.0);
        assert_eq!(stats.savings_rate, 0.0);
        assert!(stats.days_until_broke.is_none());
        assert!(stats.typical_low_balance.is_none());
    }

    #[test]
    fn averages_divide_by_a_fixed_quarter() {
        // One month of data still divides by three.
        let txns = vec![txn(5, 3000.0), txn(10, -900.0), txn(20, -600.0)];
        let stats = CashFlowService::analyze(&txns, reference()).unwrap();

        assert!((stats.average_monthly_income - 1000.0).abs() < 1e-9);
        assert!((stats.average_monthly_expenses - 500.0).abs() < 1e-9);
        assert!((stats.savings_rate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn postings_older_than_the_quarter_are_ignored() {
        let txns = vec![txn(5, 3000.0), txn(120, 9000.0), txn(120, -9000.0)];
        let stats = CashFlowService::analyze(&txns, reference()).unwrap();

        assert!((stats.average_monthly_income - 1000.0).abs() < 1e-9);
        assert_eq!(stats.average_monthly_expenses, 0.0);
    }

    #[test]
    fn expenses_without_income_keep_the_rate_at_zero() {
        let txns = vec![txn(3, -250.0)];
        let stats = CashFlowService::analyze(&txns, reference()).unwrap();

        assert_eq!(stats.savings_rate, 0.0);
        assert!((stats.average_monthly_expenses - 250.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn negative_savings_rate_when_spending_exceeds_income() {
        let txns = vec![txn(3, 1000.0), txn(4, -1500.0)];
        let stats = CashFlowService::analyze(&txns, reference()).unwrap();

        assert!((stats.savings_rate - -0.5).abs() < 1e-9);
    }
}
