//! Findash - Terminal-based financial reporting dashboard
//!
//! This library provides the core functionality for the Findash reporting
//! application. It loads a tabular dataset of financial line items,
//! derives quarterly and annual rollups, and answers a fixed set of
//! read-only report queries through a TUI and a CLI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, records)
//! - `data`: CSV ingestion and the in-memory dataset
//! - `reports`: The report queries over the dataset
//! - `display`: Table and text formatting for terminal output
//! - `cli`: Non-interactive report commands
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use findash::config::{paths::FindashPaths, settings::Settings};
//! use findash::data::load_csv;
//!
//! let paths = FindashPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let dataset = load_csv(&path, &settings.excluded_years)?;
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod tui;

pub use error::DashError;
