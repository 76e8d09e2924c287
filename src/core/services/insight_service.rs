//! Rule-based, plain-language observations over an assembled profile.
//!
//! Consumed by the AI context formatter and the dashboard endpoints. This
//! is fixed-rule text generation, not a scoring model.

use crate::domain::{FinancialProfile, Insight, Trend};

/// Savings rate below which cash flow is flagged as tight.
const LOW_SAVINGS_RATE: f64 = 0.1;
/// Savings rate at or above which cash flow is called healthy.
const HEALTHY_SAVINGS_RATE: f64 = 0.2;

/// Generates observations from a financial profile.
pub struct InsightService;

impl InsightService {
    pub fn generate(profile: &FinancialProfile) -> Vec<Insight> {
        let mut insights = Vec::new();

        if profile.cash_flow.average_monthly_income > 0.0 {
            let rate = profile.cash_flow.savings_rate;
            if rate < 0.0 {
                insights.push(Insight::warning(format!(
                    "Spending exceeded income over the trailing quarter ({:.0}% savings rate).",
                    rate * 100.0
                )));
            } else if rate < LOW_SAVINGS_RATE {
                insights.push(Insight::notice(format!(
                    "Savings rate is {:.0}%, below the 10% guideline.",
                    rate * 100.0
                )));
            } else if rate >= HEALTHY_SAVINGS_RATE {
                insights.push(Insight::info(format!(
                    "Healthy savings rate of {:.0}% over the trailing quarter.",
                    rate * 100.0
                )));
            }
        }

        let rising: Vec<&str> = profile
            .spending_patterns
            .iter()
            .filter(|p| p.trend == Trend::Increasing)
            .map(|p| p.category_name.as_str())
            .collect();
        if !rising.is_empty() {
            insights.push(Insight::notice(format!(
                "Spending is trending up in {}.",
                rising.join(", ")
            )));
        }

        let bills: Vec<_> = profile
            .recurring
            .iter()
            .filter(|r| !r.is_income())
            .collect();
        if !bills.is_empty() {
            let cycle_load: f64 = bills.iter().map(|r| r.amount.abs()).sum();
            insights.push(Insight::info(format!(
                "{} recurring bills and subscriptions detected, about {:.2} per cycle.",
                bills.len(),
                cycle_load
            )));
        }

        if let Some(point) = profile.forecast.iter().find(|p| p.expected_balance < 0.0) {
            insights.push(Insight::warning(format!(
                "Projected balance goes negative on {}.",
                point.date
            )));
        }

        insights
    }
}
