use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the analytics core.
///
/// Only input-validation problems produce errors; degenerate input (empty
/// windows, single-occurrence counterparties, all-zero amounts) yields
/// empty or zero-valued results instead.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Transaction {0} has a non-finite amount")]
    InvalidAmount(Uuid),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, AnalyticsError>;
