//! Year-over-year trend
//!
//! Groups the records for one account (optionally one unit) by year and
//! sums their annual totals. Output is ordered ascending by year with one
//! point per distinct year present; years with no matching records are
//! simply absent, not zero-filled.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::Dataset;
use crate::models::Money;

/// One (year, total) point of the trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub total: Money,
}

/// Annual evolution of a single account
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    /// The account being tracked
    pub account: String,
    /// Optional business-unit restriction; `None` means all units
    pub business_unit: Option<String>,
    /// Points ascending by year, no duplicates
    pub points: Vec<TrendPoint>,
}

impl TrendReport {
    /// Sum annual totals per year for the given account/unit
    pub fn generate(dataset: &Dataset, account: &str, business_unit: Option<&str>) -> Self {
        // BTreeMap keeps the years sorted and de-duplicated
        let mut by_year: BTreeMap<i32, Money> = BTreeMap::new();

        for record in dataset.records() {
            if record.account != account {
                continue;
            }
            if let Some(unit) = business_unit {
                if record.business_unit != unit {
                    continue;
                }
            }
            *by_year.entry(record.year).or_insert(Money::zero()) += record.annual_total();
        }

        let points = by_year
            .into_iter()
            .map(|(year, total)| TrendPoint { year, total })
            .collect();

        Self {
            account: account.to_string(),
            business_unit: business_unit.map(str::to_string),
            points,
        }
    }

    /// "All units" / unit name label for chart titles
    pub fn unit_label(&self) -> &str {
        self.business_unit.as_deref().unwrap_or("All units")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialRecord;

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

    #[test]
    fn test_points_ascending_no_duplicates() {
        let dataset = Dataset::new(vec![
            record("Sales", 2022, "UnitA", 100),
            record("Sales", 2020, "UnitB", 100),
            record("Sales", 2022, "UnitB", 100),
            record("Sales", 2021, "UnitA", 100),
        ]);

        let report = TrendReport::generate(&dataset, "Sales", None);
        let years: Vec<i32> = report.points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2020, 2021, 2022]);
        assert!(years.windows(2).all(|w| w[0] < w[1]));

        // 2022 sums both units
        assert_eq!(report.points[2].total.cents(), 2 * 12 * 100);
    }

    #[test]
    fn test_unit_filter() {
        let dataset = Dataset::new(vec![
            record("Sales", 2022, "UnitA", 100),
            record("Sales", 2022, "UnitB", 900),
        ]);

        let report = TrendReport::generate(&dataset, "Sales", Some("UnitA"));
        assert_eq!(report.points.len(), 1);
        assert_eq!(report.points[0].total.cents(), 12 * 100);
    }

    #[test]
    fn test_absent_years_are_absent() {
        let dataset = Dataset::new(vec![
            record("Sales", 2020, "UnitA", 100),
            record("Sales", 2022, "UnitA", 100),
            record("Rent", 2021, "UnitA", 100),
        ]);

        let report = TrendReport::generate(&dataset, "Sales", None);
        let years: Vec<i32> = report.points.iter().map(|p| p.year).collect();
        // 2021 has no Sales rows: no zero-filled point for it
        assert_eq!(years, vec![2020, 2022]);
    }

    #[test]
    fn test_no_matches_yields_empty_trend() {
        let dataset = Dataset::new(vec![record("Rent", 2022, "UnitA", 100)]);
        let report = TrendReport::generate(&dataset, "Sales", None);
        assert!(report.points.is_empty());
    }
}
