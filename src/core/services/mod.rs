//! Stateless analysis services.
//!
//! Each service is a deterministic pure function of the transactions it is
//! handed plus an injected reference time. The detector, spending analyzer,
//! and cash-flow calculator are mutually independent; the forecaster
//! consumes the detector's output; the profile service composes all four.

pub mod cashflow_service;
pub mod forecast_service;
pub mod insight_service;
pub mod profile_service;
pub mod recurring_service;
pub mod spending_service;

pub use cashflow_service::CashFlowService;
pub use forecast_service::ForecastService;
pub use insight_service::InsightService;
pub use profile_service::ProfileService;
pub use recurring_service::RecurringService;
pub use spending_service::SpendingService;
