//! Assembles the combined financial profile served to API consumers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::core::clock::Clock;
use crate::domain::{FinancialProfile, Transaction};
use crate::errors::Result;

use super::forecast_service::{DAILY_STATS_WINDOW_DAYS, DEFAULT_HORIZON_DAYS};
use super::{CashFlowService, ForecastService, RecurringService, SpendingService};

/// Runs every analyzer over one transaction window and merges the results.
pub struct ProfileService;

impl ProfileService {
    /// Builds a profile from the supplied window. The detector, spending
    /// analyzer, and cash-flow calculator each see the full transaction
    /// set; the forecaster consumes the detected recurring series plus a
    /// daily-spend distribution derived from the same history. `reference`
    /// is the injected "now" shared by every trailing-window filter.
    pub fn build(
        transactions: &[Transaction],
        categories: &HashMap<Uuid, String>,
        current_balance: f64,
        reference: DateTime<Utc>,
    ) -> Result<FinancialProfile> {
        let recurring = RecurringService::detect(transactions)?;
        let spending_patterns = SpendingService::analyze(transactions, categories, reference)?;
        let cash_flow = CashFlowService::analyze(transactions, reference)?;
        let daily_spend =
            ForecastService::daily_spend_stats(transactions, DAILY_STATS_WINDOW_DAYS, reference)?;
        let forecast = ForecastService::project(
            current_balance,
            &recurring,
            daily_spend,
            DEFAULT_HORIZON_DAYS,
            reference,
        );

        debug!(
            recurring = recurring.len(),
            patterns = spending_patterns.len(),
            forecast_days = forecast.len(),
            "financial profile assembled"
        );

        Ok(FinancialProfile {
            recurring,
            spending_patterns,
            cash_flow,
            forecast,
            generated_at: reference,
        })
    }

    /// Production entry point: [`ProfileService::build`] with "now" taken
    /// from the supplied clock.
    pub fn build_with_clock(
        transactions: &[Transaction],
        categories: &HashMap<Uuid, String>,
        current_balance: f64,
        clock: &dyn Clock,
    ) -> Result<FinancialProfile> {
        Self::build(transactions, categories, current_balance, clock.now())
    }
}
