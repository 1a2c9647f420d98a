//! Table rendering for terminal output
//!
//! Builds the projected cell text for records (null months blank, money
//! formatted with grouping) and renders report tables with tabled.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::{FinancialRecord, Money, Month, Quarter};
use crate::reports::{FilteredReport, RawListing, TrendReport};

/// Format an optional money cell: blank for null, "$1,234.56" otherwise
pub fn money_cell(value: Option<Money>) -> String {
    match value {
        Some(amount) => amount.to_string(),
        None => String::new(),
    }
}

/// Project one record onto its display cells, in header order
pub fn record_cells(record: &FinancialRecord, include_months: bool) -> Vec<String> {
    let mut cells = vec![
        record.account.clone(),
        record.year.to_string(),
        record.scenario.clone(),
        record.business_unit.clone(),
        record.currency.clone(),
    ];
    if include_months {
        cells.extend(Month::ALL.iter().map(|m| money_cell(record.month(*m))));
    }
    cells.extend(
        Quarter::ALL
            .iter()
            .map(|q| record.quarter(*q).to_string()),
    );
    cells.push(record.annual_total().to_string());
    cells
}

/// Render the raw listing as a table
pub fn render_raw_table(listing: &RawListing) -> String {
    let mut builder = Builder::default();
    builder.push_record(listing.headers());
    for record in listing.records() {
        builder.push_record(record_cells(record, listing.include_months));
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Render the filtered rows as a table
pub fn render_filtered_table(report: &FilteredReport) -> String {
    let include_months = !report.hide_months;

    let mut builder = Builder::default();
    builder.push_record(crate::reports::raw::projection_headers(include_months));
    for row in &report.rows {
        builder.push_record(record_cells(row, include_months));
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Render the quarterly-totals block of a filtered report
pub fn render_quarterly_totals(report: &FilteredReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Quarter", "Total"]);
    for quarter in Quarter::ALL {
        builder.push_record([
            quarter.label().to_string(),
            report.quarterly_totals[quarter.index()].to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Render the trend points as a table
pub fn render_trend_table(report: &TrendReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Year", "Annual Total"]);
    for point in &report.points {
        builder.push_record([point.year.to_string(), point.total.to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}
