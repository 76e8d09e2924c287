#![doc(test(attr(deny(warnings))))]

//! Insight Core derives financial analytics from normalized bank
//! transactions: recurring-payment detection, category spending trends,
//! cash-flow statistics, and a banded balance forecast.
//!
//! The crate is a pure analysis layer. Callers supply sign-normalized
//! transactions (credits positive, debits negative) together with an
//! explicit reference time; every result is recomputed from scratch per
//! call, with no I/O and no shared state.

pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Insight Core tracing initialized.");
    });
}
