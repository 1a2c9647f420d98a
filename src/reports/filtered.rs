//! Filtered listing with totals
//!
//! Selects records matching a year and account exactly, with an optional
//! business-unit filter, and sums the derived columns across the selection.
//! An empty match is not an error: the table is empty and every total is
//! zero.

use serde::Serialize;

use crate::data::Dataset;
use crate::models::{FinancialRecord, Money, Quarter};

/// A filtered slice of the dataset plus its quarterly and annual totals
#[derive(Debug, Clone, Serialize)]
pub struct FilteredReport<'a> {
    /// Selected fiscal year
    pub year: i32,
    /// Selected account label
    pub account: String,
    /// Selected business unit; `None` means all units
    pub business_unit: Option<String>,
    /// Whether month columns are hidden in the projection
    pub hide_months: bool,
    /// Matching records, in source order
    pub rows: Vec<&'a FinancialRecord>,
    /// Sum of each quarter column across the selection, Q1..Q4
    pub quarterly_totals: [Money; 4],
    /// Sum of the annual totals across the selection
    pub annual_total: Money,
}

impl<'a> FilteredReport<'a> {
    /// Select and total the records for a year/account/optional unit
    pub fn generate(
        dataset: &'a Dataset,
        year: i32,
        account: &str,
        business_unit: Option<&str>,
        hide_months: bool,
    ) -> Self {
        let rows: Vec<&FinancialRecord> = dataset
            .records()
            .iter()
            .filter(|r| r.year == year && r.account == account)
            .filter(|r| business_unit.map_or(true, |unit| r.business_unit == unit))
            .collect();

        let mut quarterly_totals = [Money::zero(); 4];
        let mut annual_total = Money::zero();
        for row in &rows {
            for quarter in Quarter::ALL {
                quarterly_totals[quarter.index()] += row.quarter(quarter);
            }
            annual_total += row.annual_total();
        }

        Self {
            year,
            account: account.to_string(),
            business_unit: business_unit.map(str::to_string),
            hide_months,
            rows,
            quarterly_totals,
            annual_total,
        }
    }

    /// "All units" / unit name label for headers
    pub fn unit_label(&self) -> &str {
        self.business_unit.as_deref().unwrap_or("All units")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(account: &str, year: i32, unit: &str, cents: i64) -> FinancialRecord {
        FinancialRecord::new(
            account,
            year,
            "Actuals",
            unit,
            "USD",
            [Some(Money::from_cents(cents)); 12],
        )
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record("Sales", 2022, "UnitA", 100),
            record("Sales", 2022, "UnitB", 200),
            record("Sales", 2021, "UnitA", 400),
            record("Rent", 2022, "UnitA", 800),
        ])
    }

    #[test]
    fn test_filter_by_year_and_account() {
        let data = dataset();
        let report = FilteredReport::generate(&data, 2022, "Sales", None, true);

        assert_eq!(report.rows.len(), 2);
        // each record contributes 3 months per quarter
        assert_eq!(report.quarterly_totals[0].cents(), 3 * (100 + 200));
        assert_eq!(report.annual_total.cents(), 12 * (100 + 200));
    }

    #[test]
    fn test_unit_filter_selects_subset() {
        let data = dataset();
        let all_units = FilteredReport::generate(&data, 2022, "Sales", None, true);
        let one_unit = FilteredReport::generate(&data, 2022, "Sales", Some("UnitA"), true);

        assert!(one_unit.rows.len() <= all_units.rows.len());
        assert_eq!(one_unit.rows.len(), 1);
        assert!(one_unit.annual_total <= all_units.annual_total);
        assert_eq!(one_unit.annual_total.cents(), 12 * 100);
        for quarter in Quarter::ALL {
            assert!(
                one_unit.quarterly_totals[quarter.index()]
                    <= all_units.quarterly_totals[quarter.index()]
            );
        }
    }

    #[test]
    fn test_empty_match_is_not_an_error() {
        let data = dataset();
        let report = FilteredReport::generate(&data, 2019, "Sales", None, true);

        assert!(report.rows.is_empty());
        assert_eq!(report.annual_total, Money::zero());
        assert_eq!(report.quarterly_totals, [Money::zero(); 4]);
    }

    #[test]
    fn test_unit_label() {
        let data = dataset();
        assert_eq!(
            FilteredReport::generate(&data, 2022, "Sales", None, true).unit_label(),
            "All units"
        );
        assert_eq!(
            FilteredReport::generate(&data, 2022, "Sales", Some("UnitA"), true).unit_label(),
            "UnitA"
        );
    }

    #[test]
    fn test_idempotence() {
        let data = dataset();
        let a = FilteredReport::generate(&data, 2022, "Sales", Some("UnitB"), true);
        let b = FilteredReport::generate(&data, 2022, "Sales", Some("UnitB"), true);

        assert_eq!(a.rows.len(), b.rows.len());
        assert_eq!(a.quarterly_totals, b.quarterly_totals);
        assert_eq!(a.annual_total, b.annual_total);
    }
}
