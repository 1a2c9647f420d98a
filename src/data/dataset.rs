//! Immutable dataset snapshot
//!
//! The full record set is loaded once at session start and then held
//! read-only for the lifetime of the session. Every query is a pure
//! function of this snapshot and its explicit parameters; there is no
//! write path and no ambient global state.

use crate::models::FinancialRecord;

/// The loaded record set plus the distinct label sets the selectors need
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<FinancialRecord>,
    years: Vec<i32>,
    accounts: Vec<String>,
    business_units: Vec<String>,
}

impl Dataset {
    /// Build a snapshot from already-derived records
    pub fn new(records: Vec<FinancialRecord>) -> Self {
        let mut years: Vec<i32> = Vec::new();
        let mut accounts: Vec<String> = Vec::new();
        let mut business_units: Vec<String> = Vec::new();

        for record in &records {
            if !years.contains(&record.year) {
                years.push(record.year);
            }
            if !accounts.contains(&record.account) {
                accounts.push(record.account.clone());
            }
            if !business_units.contains(&record.business_unit) {
                business_units.push(record.business_unit.clone());
            }
        }
        years.sort_unstable();

        Self {
            records,
            years,
            accounts,
            business_units,
        }
    }

    /// All records, in source order
    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, ascending
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Distinct account labels, in order of first appearance
    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    /// Distinct business units, in order of first appearance
    pub fn business_units(&self) -> &[String] {
        &self.business_units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn record(account: &str, year: i32, unit: &str) -> FinancialRecord {
        FinancialRecord::new(
            account,
            year,
            "Actuals",
            unit,
            "USD",
            [Some(Money::from_cents(100)); 12],
        )
    }

    #[test]
    fn test_distinct_label_sets() {
        let dataset = Dataset::new(vec![
            record("Sales", 2022, "UnitB"),
            record("Sales", 2020, "UnitA"),
            record("Cost of Goods Sold", 2022, "UnitB"),
            record("Sales", 2021, "UnitA"),
        ]);

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.years(), &[2020, 2021, 2022]);
        assert_eq!(dataset.accounts(), &["Sales", "Cost of Goods Sold"]);
        assert_eq!(dataset.business_units(), &["UnitB", "UnitA"]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.years().is_empty());
        assert!(dataset.accounts().is_empty());
    }
}
