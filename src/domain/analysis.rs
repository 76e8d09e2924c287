//! Derived analysis value objects returned by the services.
//!
//! All of these are ephemeral: computed from the transaction window passed
//! by the caller and merged into a [`FinancialProfile`] for API consumers.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurring::RecurringTransaction;

/// Month-over-month direction of a category's spending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Increasing => "Increasing",
            Trend::Decreasing => "Decreasing",
            Trend::Stable => "Stable",
        };
        f.write_str(label)
    }
}

/// Per-category expense aggregation with a trailing-month trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingPattern {
    pub category_id: Uuid,
    pub category_name: String,
    /// Unsigned average monthly outflow over the category's observed span.
    pub average_monthly_spend: f64,
    pub trend: Trend,
    pub last_month_spend: f64,
    /// Placeholder; a real dispersion measure needs per-period sampling
    /// that is not computed yet.
    pub volatility: f64,
}

/// Trailing-quarter cash-flow statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CashFlowStats {
    pub average_monthly_income: f64,
    pub average_monthly_expenses: f64,
    /// `(income - expenses) / income` over the window; 0 when no income.
    pub savings_rate: f64,
    /// Unknown: needs a balance-history series the engine never receives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_broke: Option<u32>,
    /// Unknown: see [`CashFlowStats::days_until_broke`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_low_balance: Option<f64>,
}

/// Mean and standard deviation of daily variable spend, supplied to the
/// forecaster by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DailySpendStats {
    pub mean: f64,
    pub std_dev: f64,
}

/// One day of the balance projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub expected_balance: f64,
    pub optimistic_balance: f64,
    pub pessimistic_balance: f64,
}

/// Merged output of one analysis pass, as served to budget-insight
/// endpoints, the dashboard snapshot, and the AI context formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub recurring: Vec<RecurringTransaction>,
    pub spending_patterns: Vec<SpendingPattern>,
    pub cash_flow: CashFlowStats,
    pub forecast: Vec<ForecastPoint>,
    pub generated_at: DateTime<Utc>,
}

/// Weight of a generated observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Info,
    Notice,
    Warning,
}

/// A plain-language observation derived from a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: InsightSeverity,
    pub message: String,
}

impl Insight {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: InsightSeverity::Info,
            message: message.into(),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            severity: InsightSeverity::Notice,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: InsightSeverity::Warning,
            message: message.into(),
        }
    }
}
