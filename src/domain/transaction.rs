//! Normalized bank transactions as supplied by the data-access layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AnalyticsError, Result};

/// A sign-normalized bank transaction.
///
/// The amount sign is the single source of truth for direction: positive
/// values are inflows (credits), negative values outflows (debits). The
/// caller normalizes signs before handing transactions to the core; no
/// analyzer re-derives direction from any other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub posted_at: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl Transaction {
    pub fn new(posted_at: DateTime<Utc>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            posted_at,
            description: description.into(),
            merchant_name: None,
            amount,
            category_id: None,
            category_name: None,
        }
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant_name = Some(merchant.into());
        self
    }

    pub fn with_category(mut self, category_id: Uuid, name: impl Into<String>) -> Self {
        self.category_id = Some(category_id);
        self.category_name = Some(name.into());
        self
    }

    /// Label grouping postings that belong to the same counterparty.
    /// Falls back to the narrative when no merchant name is present.
    pub fn counterparty(&self) -> &str {
        self.merchant_name.as_deref().unwrap_or(&self.description)
    }

    pub fn posted_date(&self) -> NaiveDate {
        self.posted_at.date_naive()
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

/// Rejects transaction sets that cannot be analyzed.
///
/// A non-finite amount means upstream data is corrupt; the whole call
/// fails rather than silently skipping rows and masking the problem.
pub fn validate(transactions: &[Transaction]) -> Result<()> {
    for txn in transactions {
        if !txn.amount.is_finite() {
            return Err(AnalyticsError::InvalidAmount(txn.id));
        }
    }
    Ok(())
}
