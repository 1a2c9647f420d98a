use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use findash::cli::{handle_report_command, ReportCommands};
use findash::config::{paths::FindashPaths, settings::Settings};
use findash::data::{load_csv, Dataset};
use findash::error::DashError;

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Terminal-based financial reporting dashboard",
    long_about = "Findash loads a tabular dataset of financial line items, derives \
                  quarterly and annual rollups, and answers a fixed set of read-only \
                  report queries through a TUI and a CLI."
)]
struct Cli {
    /// Path to the dataset CSV
    #[arg(short, long, env = "FINDASH_DATA", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Run a report and print it to stdout
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = FindashPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            let dataset = load_dataset(cli.file.as_deref(), &settings)?;
            findash::tui::run_tui(&dataset, &settings)?;
        }
        Some(Commands::Report(cmd)) => {
            let dataset = load_dataset(cli.file.as_deref(), &settings)?;
            handle_report_command(&dataset, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Findash Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Revenue accounts: {}", settings.revenue_accounts.join(", "));
            println!("  Cost accounts:    {}", settings.cost_accounts.join(", "));
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!(
                "  Excluded years:   {}",
                settings
                    .excluded_years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    Ok(())
}

/// Load the dataset, or fail before any view gets a chance to render
fn load_dataset(file: Option<&std::path::Path>, settings: &Settings) -> Result<Dataset> {
    let path = file.ok_or_else(|| {
        DashError::Config("no dataset given; pass --file or set FINDASH_DATA".to_string())
    })?;

    let dataset = load_csv(path, &settings.excluded_years)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;

    Ok(dataset)
}
