//! Pure domain models for the analytics core.
//!
//! Input transactions plus the derived value objects the services return.
//! No I/O, no clock access, no storage. Only data types and core enums.

pub mod analysis;
pub mod recurring;
pub mod transaction;

pub use analysis::*;
pub use recurring::*;
pub use transaction::*;
