//! End-to-end tests for the findash binary
//!
//! Each test runs the compiled binary against a small CSV fixture in a
//! temp directory, with the config directory pointed at the same temp
//! directory so the suite never touches the user's real config.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

const CSV_HEADER: &str =
    "Account,Year,Scenario,business_unit,Currency,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec";

fn write_fixture(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("data.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", CSV_HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    path
}

fn findash(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("findash").unwrap();
    cmd.env("FINDASH_CONFIG_DIR", dir.path());
    cmd
}

fn sales_row(year: i32, monthly: &str) -> String {
    let months = vec![monthly; 12].join(",");
    format!("Sales,{},Actuals,UnitA,USD,{}", year, months)
}

fn cogs_row(year: i32, monthly: &str) -> String {
    let months = vec![monthly; 12].join(",");
    format!("Cost of Goods Sold,{},Actuals,UnitA,USD,{}", year, months)
}

#[test]
fn raw_report_lists_records_with_derived_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "100")]);

    findash(&dir)
        .args(["--file", path.to_str().unwrap(), "report", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales"))
        .stdout(predicate::str::contains("Annual Total"))
        .stdout(predicate::str::contains("$1,200.00"))
        .stdout(predicate::str::contains("1 records"));
}

#[test]
fn raw_report_no_months_drops_month_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "100")]);

    findash(&dir)
        .args([
            "--file",
            path.to_str().unwrap(),
            "report",
            "raw",
            "--no-months",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1"))
        .stdout(predicate::str::contains("Jan").not());
}

#[test]
fn excluded_year_never_reaches_reports() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "100"), &sales_row(2023, "999")]);

    findash(&dir)
        .args(["--file", path.to_str().unwrap(), "report", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2022"))
        .stdout(predicate::str::contains("2023").not());
}

#[test]
fn filtered_report_prints_totals() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "100"), &cogs_row(2022, "40")]);

    findash(&dir)
        .args([
            "--file",
            path.to_str().unwrap(),
            "report",
            "filtered",
            "2022",
            "Sales",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("All units"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("Annual total: $1,200.00"));
}

#[test]
fn filtered_report_empty_match_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "100")]);

    findash(&dir)
        .args([
            "--file",
            path.to_str().unwrap(),
            "report",
            "filtered",
            "2022",
            "Rent",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annual total: $0.00"));
}

#[test]
fn trend_report_sorts_years_ascending() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "200"), &sales_row(2021, "100")]);

    findash(&dir)
        .args([
            "--file",
            path.to_str().unwrap(),
            "report",
            "trend",
            "Sales",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021").and(predicate::str::contains("2022")))
        .stdout(predicate::function(|out: &str| {
            match (out.find("2021"), out.find("2022")) {
                (Some(a), Some(b)) => a < b,
                _ => false,
            }
        }));
}

#[test]
fn margin_report_prints_percentages() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "100"), &cogs_row(2022, "40")]);

    findash(&dir)
        .args([
            "--file",
            path.to_str().unwrap(),
            "report",
            "margin",
            "2022",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("60.00%"));
}

#[test]
fn margin_report_without_revenue_fails_with_account_list() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&cogs_row(2022, "40")]);

    findash(&dir)
        .args([
            "--file",
            path.to_str().unwrap(),
            "report",
            "margin",
            "2022",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No revenue found for 2022"))
        .stderr(predicate::str::contains("Cost of Goods Sold"));
}

#[test]
fn missing_column_aborts_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "Account,Scenario,business_unit,Currency,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec"
    )
    .unwrap();
    writeln!(
        file,
        "Sales,Actuals,UnitA,USD,1,1,1,1,1,1,1,1,1,1,1,1"
    )
    .unwrap();

    findash(&dir)
        .args(["--file", path.to_str().unwrap(), "report", "raw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Year"));
}

#[test]
fn missing_file_fails_before_any_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");

    findash(&dir)
        .args(["--file", path.to_str().unwrap(), "report", "raw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn report_without_file_argument_fails() {
    let dir = TempDir::new().unwrap();

    findash(&dir)
        .args(["report", "raw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dataset given"));
}

#[test]
fn json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &[&sales_row(2022, "100"), &cogs_row(2022, "40")]);

    let output = findash(&dir)
        .args([
            "--file",
            path.to_str().unwrap(),
            "report",
            "margin",
            "2022",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["year"], 2022);
    assert_eq!(value["annual"], 60.0);
}

#[test]
fn config_command_shows_settings() {
    let dir = TempDir::new().unwrap();

    findash(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Revenue accounts: Sales"))
        .stdout(predicate::str::contains("Excluded years:   2023"));
}
