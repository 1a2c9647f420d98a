//! Profit-margin analysis
//!
//! Computes quarterly and annual profit margins for one year from the
//! configured revenue and cost account sets. The zero-revenue guard is
//! checked once, on the annual total, before any quarterly computation;
//! a quarter with zero revenue yields a 0.00% margin instead of an error.
//! The two branches intentionally diverge in policy.

use serde::Serialize;

use crate::data::Dataset;
use crate::error::{DashError, DashResult};
use crate::models::{FinancialRecord, Money, Quarter};

/// Quarterly and annual margins for one year, in percent, rounded to
/// 2 decimal places
#[derive(Debug, Clone, Serialize)]
pub struct MarginReport {
    /// The analyzed fiscal year
    pub year: i32,
    /// Per-quarter margin percentages, Q1..Q4
    pub quarterly: [f64; 4],
    /// Annual margin percentage
    pub annual: f64,
}

impl MarginReport {
    /// Compute margins for a year
    ///
    /// Fails with `DashError::NoRevenue` when the revenue accounts sum to
    /// zero across the year; the error carries the available account labels
    /// so the caller can point the user at the data.
    pub fn generate(
        dataset: &Dataset,
        revenue_accounts: &[String],
        cost_accounts: &[String],
        year: i32,
    ) -> DashResult<Self> {
        let revenue: Vec<&FinancialRecord> = select(dataset, revenue_accounts, year);
        let cost: Vec<&FinancialRecord> = select(dataset, cost_accounts, year);

        let total_rev: Money = revenue.iter().map(|r| r.annual_total()).sum();
        let total_cost: Money = cost.iter().map(|r| r.annual_total()).sum();

        // Annual guard first: short-circuits the whole query
        if total_rev.is_zero() {
            return Err(DashError::NoRevenue {
                year,
                available_accounts: dataset.accounts().to_vec(),
            });
        }

        let mut quarterly = [0.0; 4];
        for quarter in Quarter::ALL {
            let rev_q: Money = revenue.iter().map(|r| r.quarter(quarter)).sum();
            let cost_q: Money = cost.iter().map(|r| r.quarter(quarter)).sum();
            // zero quarterly revenue is a 0.00% margin, not an error
            quarterly[quarter.index()] = if rev_q.is_zero() {
                0.0
            } else {
                round2(margin_pct(rev_q, cost_q))
            };
        }

        let annual = round2(margin_pct(total_rev, total_cost));

        Ok(Self {
            year,
            quarterly,
            annual,
        })
    }
}

/// Records for the given year whose account is in the configured set
fn select<'a>(dataset: &'a Dataset, accounts: &[String], year: i32) -> Vec<&'a FinancialRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| r.year == year && accounts.iter().any(|a| *a == r.account))
        .collect()
}

/// (revenue - cost) / revenue, as a percentage
fn margin_pct(revenue: Money, cost: Money) -> f64 {
    (revenue - cost).to_f64() / revenue.to_f64() * 100.0
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
