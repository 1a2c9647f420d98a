//! Data source loading
//!
//! Parses a CSV export of the "Financials" sheet into `FinancialRecord`s.
//! Column names and casing are an exact-match contract: `Account`, `Year`,
//! `Scenario`, `business_unit`, `Currency`, and the twelve month columns
//! `Jan`..`Dec`. Any missing column, unreadable file, or malformed cell is
//! fatal; the dashboard never starts on a partial load.

use std::path::Path;

use csv::StringRecord;

use crate::error::{DashError, DashResult};
use crate::models::{FinancialRecord, Money, Month};

use super::dataset::Dataset;

/// Required non-month columns, in contract order
const BASE_COLUMNS: [&str; 5] = ["Account", "Year", "Scenario", "business_unit", "Currency"];

/// Resolved header positions for one source file
struct ColumnIndex {
    account: usize,
    year: usize,
    scenario: usize,
    business_unit: usize,
    currency: usize,
    months: [usize; 12],
}

impl ColumnIndex {
    /// Resolve the exact-match column contract against a header row
    fn from_headers(headers: &StringRecord) -> DashResult<Self> {
        let find = |name: &'static str| -> DashResult<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DashError::MissingColumn { column: name })
        };

        let mut months = [0usize; 12];
        for month in Month::ALL {
            months[month.index()] = find(month.label())?;
        }

        Ok(Self {
            account: find(BASE_COLUMNS[0])?,
            year: find(BASE_COLUMNS[1])?,
            scenario: find(BASE_COLUMNS[2])?,
            business_unit: find(BASE_COLUMNS[3])?,
            currency: find(BASE_COLUMNS[4])?,
            months,
        })
    }
}

/// Load the record set from a CSV file, dropping excluded years and
/// computing the derived quarterly and annual columns
pub fn load_csv(path: &Path, excluded_years: &[i32]) -> DashResult<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DashError::source_unreadable(path.display(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| DashError::source_unreadable(path.display(), e))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Header is row 1; data rows are 1-indexed after it
        let row = idx + 2;
        let record = result?;
        let parsed = parse_record(&record, row, &columns)?;
        if excluded_years.contains(&parsed.year) {
            continue;
        }
        records.push(parsed);
    }

    Ok(Dataset::new(records))
}

/// Parse a single data row into a record with derived columns
fn parse_record(
    record: &StringRecord,
    row: usize,
    columns: &ColumnIndex,
) -> DashResult<FinancialRecord> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let year: i32 = field(columns.year).parse().map_err(|_| DashError::InvalidCell {
        column: "Year".into(),
        row,
        message: format!("expected an integer year, got '{}'", field(columns.year)),
    })?;

    let mut months: [Option<Money>; 12] = [None; 12];
    for month in Month::ALL {
        let cell = field(columns.months[month.index()]);
        if cell.is_empty() {
            continue;
        }
        let value = Money::parse(cell).map_err(|e| DashError::InvalidCell {
            column: month.label().into(),
            row,
            message: e.to_string(),
        })?;
        months[month.index()] = Some(value);
    }

    Ok(FinancialRecord::new(
        field(columns.account),
        year,
        field(columns.scenario),
        field(columns.business_unit),
        field(columns.currency),
        months,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Account,Year,Scenario,business_unit,Currency,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_computes_derived_columns() {
        let file = write_csv(&[
            HEADER,
            "Sales,2022,Actuals,UnitA,USD,100,100,100,100,100,100,100,100,100,100,100,100",
        ]);

        let dataset = load_csv(file.path(), &[2023]).unwrap();
        assert_eq!(dataset.len(), 1);

        let record = &dataset.records()[0];
        assert_eq!(record.account, "Sales");
        assert_eq!(record.year, 2022);
        assert_eq!(record.business_unit, "UnitA");
        for quarter in crate::models::Quarter::ALL {
            assert_eq!(record.quarter(quarter), Money::from_units(300));
        }
        assert_eq!(record.annual_total(), Money::from_units(1200));
    }

    #[test]
    fn test_excluded_year_dropped() {
        let file = write_csv(&[
            HEADER,
            "Sales,2022,Actuals,UnitA,USD,1,1,1,1,1,1,1,1,1,1,1,1",
            "Sales,2023,Actuals,UnitA,USD,1,1,1,1,1,1,1,1,1,1,1,1",
        ]);

        let dataset = load_csv(file.path(), &[2023]).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.records().iter().all(|r| r.year != 2023));
        assert_eq!(dataset.years(), &[2022]);
    }

    #[test]
    fn test_blank_cells_are_null_not_zero() {
        let file = write_csv(&[
            HEADER,
            "Sales,2022,Actuals,UnitA,USD,,200,,,,,,,,,,",
        ]);

        let dataset = load_csv(file.path(), &[]).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.month(Month::Jan), None);
        assert_eq!(record.month(Month::Feb), Some(Money::from_units(200)));
        // nulls sum as zero in the rollups
        assert_eq!(record.quarter(crate::models::Quarter::Q1), Money::from_units(200));
        assert_eq!(record.annual_total(), Money::from_units(200));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let file = write_csv(&[
            "Account,Year,Scenario,business_unit,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec",
            "Sales,2022,Actuals,UnitA,1,1,1,1,1,1,1,1,1,1,1,1",
        ]);

        let err = load_csv(file.path(), &[]).unwrap_err();
        assert!(matches!(err, DashError::MissingColumn { column: "Currency" }));
    }

    #[test]
    fn test_case_sensitive_column_contract() {
        // "year" instead of "Year" must not match
        let file = write_csv(&[
            "Account,year,Scenario,business_unit,Currency,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec",
        ]);

        let err = load_csv(file.path(), &[]).unwrap_err();
        assert!(matches!(err, DashError::MissingColumn { column: "Year" }));
    }

    #[test]
    fn test_malformed_cell_is_fatal() {
        let file = write_csv(&[
            HEADER,
            "Sales,2022,Actuals,UnitA,USD,oops,1,1,1,1,1,1,1,1,1,1,1",
        ]);

        let err = load_csv(file.path(), &[]).unwrap_err();
        match err {
            DashError::InvalidCell { column, row, .. } => {
                assert_eq!(column, "Jan");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidCell, got {:?}", other),
        }
    }

    #[test]
    fn test_multibyte_cell_is_invalid_not_a_panic() {
        // a currency symbol leaking into a month cell must surface as
        // InvalidCell like any other malformed value
        let file = write_csv(&[
            HEADER,
            "Sales,2022,Actuals,UnitA,USD,1.€,1,1,1,1,1,1,1,1,1,1,1",
        ]);

        let err = load_csv(file.path(), &[]).unwrap_err();
        match err {
            DashError::InvalidCell { column, row, .. } => {
                assert_eq!(column, "Jan");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidCell, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_csv(Path::new("/nonexistent/financials.csv"), &[]).unwrap_err();
        assert!(matches!(err, DashError::Load(_)));
    }
}
