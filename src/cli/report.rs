//! CLI commands for reports
//!
//! Non-interactive counterparts of the TUI views: each subcommand runs one
//! report over the loaded dataset and prints it as a table, or as JSON
//! with `--json`.

use clap::Subcommand;

use crate::config::Settings;
use crate::data::Dataset;
use crate::display::{
    format_bar, format_percentage, render_filtered_table, render_quarterly_totals,
    render_raw_table, render_trend_table,
};
use crate::error::DashResult;
use crate::models::Quarter;
use crate::reports::{FilteredReport, MarginReport, RawListing, TrendReport};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List every record with its derived quarterly and annual columns
    Raw {
        /// Hide the twelve month columns
        #[arg(long)]
        no_months: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the records for one year and account, with totals
    Filtered {
        /// Fiscal year to select
        year: i32,

        /// Account to select
        account: String,

        /// Restrict to one business unit (default: all units)
        #[arg(short, long)]
        unit: Option<String>,

        /// Show the twelve month columns
        #[arg(long)]
        months: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Annual totals per year for one account
    Trend {
        /// Account to track
        account: String,

        /// Restrict to one business unit (default: all units)
        #[arg(short, long)]
        unit: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Quarterly and annual margins for one year
    Margin {
        /// Fiscal year to analyze
        year: i32,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    dataset: &Dataset,
    settings: &Settings,
    cmd: ReportCommands,
) -> DashResult<()> {
    match cmd {
        ReportCommands::Raw { no_months, json } => handle_raw(dataset, !no_months, json),
        ReportCommands::Filtered {
            year,
            account,
            unit,
            months,
            json,
        } => handle_filtered(dataset, year, &account, unit.as_deref(), months, json),
        ReportCommands::Trend {
            account,
            unit,
            json,
        } => handle_trend(dataset, &account, unit.as_deref(), json),
        ReportCommands::Margin { year, json } => handle_margin(dataset, settings, year, json),
    }
}

/// Print the raw listing
fn handle_raw(dataset: &Dataset, include_months: bool, json: bool) -> DashResult<()> {
    let listing = RawListing::generate(dataset, include_months);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", render_raw_table(&listing));
    println!("{} records", listing.records().len());
    Ok(())
}

/// Print the filtered slice and its totals
fn handle_filtered(
    dataset: &Dataset,
    year: i32,
    account: &str,
    unit: Option<&str>,
    months: bool,
    json: bool,
) -> DashResult<()> {
    let report = FilteredReport::generate(dataset, year, account, unit, !months);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} / {} / {}",
        report.year,
        report.account,
        report.unit_label()
    );
    println!();
    println!("{}", render_filtered_table(&report));
    println!();
    println!("{}", render_quarterly_totals(&report));
    println!("Annual total: {}", report.annual_total);
    Ok(())
}

/// Print the yearly trend with a text bar per year
fn handle_trend(
    dataset: &Dataset,
    account: &str,
    unit: Option<&str>,
    json: bool,
) -> DashResult<()> {
    let report = TrendReport::generate(dataset, account, unit);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} / {}", report.account, report.unit_label());
    println!();
    println!("{}", render_trend_table(&report));

    let max = report
        .points
        .iter()
        .map(|p| p.total.to_f64())
        .fold(0.0_f64, f64::max);
    for point in &report.points {
        println!(
            "{}  {}",
            point.year,
            format_bar(point.total.to_f64(), max, 40)
        );
    }
    Ok(())
}

/// Print the margin report; the no-revenue case propagates as an error
fn handle_margin(dataset: &Dataset, settings: &Settings, year: i32, json: bool) -> DashResult<()> {
    let report = MarginReport::generate(
        dataset,
        &settings.revenue_accounts,
        &settings.cost_accounts,
        year,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Margins for {}", report.year);
    for quarter in Quarter::ALL {
        println!(
            "  {}      {:>8}",
            quarter.label(),
            format_percentage(report.quarterly[quarter.index()])
        );
    }
    println!("  Annual  {:>8}", format_percentage(report.annual));
    Ok(())
}
