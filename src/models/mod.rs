//! Core data models for findash
//!
//! This module contains the data structures that represent the reporting
//! domain: monetary amounts, months and quarters, and financial line items.

pub mod money;
pub mod record;

pub use money::Money;
pub use record::{FinancialRecord, Month, Quarter};
