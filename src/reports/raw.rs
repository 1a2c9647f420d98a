//! Raw data listing
//!
//! Projects every record onto the display columns: the base fields, the
//! twelve month columns (optional), the derived quarters, and the annual
//! total. No filtering; the only failure mode is an upstream load failure.

use serde::Serialize;

use crate::data::Dataset;
use crate::models::{FinancialRecord, Month, Quarter};

/// Base (non-numeric) display columns, in order
pub const BASE_HEADERS: [&str; 5] = ["Account", "Year", "Scenario", "business_unit", "Currency"];

/// Header label for the derived annual column
pub const ANNUAL_HEADER: &str = "Annual Total";

/// Column headers for a record projection: base fields, optionally the
/// twelve months, then quarters and the annual total. Every table that
/// shows records shares this contract.
pub fn projection_headers(include_months: bool) -> Vec<&'static str> {
    let mut headers: Vec<&'static str> = BASE_HEADERS.to_vec();
    if include_months {
        headers.extend(Month::ALL.iter().map(|m| m.label()));
    }
    headers.extend(Quarter::ALL.iter().map(|q| q.label()));
    headers.push(ANNUAL_HEADER);
    headers
}

/// The raw listing: every record with its derived columns
#[derive(Debug, Clone, Serialize)]
pub struct RawListing<'a> {
    /// Whether month columns are part of the projection
    pub include_months: bool,
    records: &'a [FinancialRecord],
}

impl<'a> RawListing<'a> {
    /// Project the full dataset onto the listing columns
    pub fn generate(dataset: &'a Dataset, include_months: bool) -> Self {
        Self {
            include_months,
            records: dataset.records(),
        }
    }

    /// All records in the listing
    pub fn records(&self) -> &'a [FinancialRecord] {
        self.records
    }

    /// Column headers for the current projection
    pub fn headers(&self) -> Vec<&'static str> {
        projection_headers(self.include_months)
    }
}
