//! Terminal User Interface module
//!
//! This module provides the dashboard TUI using ratatui. The TUI has one
//! view per report: the raw listing, the filtered slice with totals, the
//! yearly trend chart, and the margin gauges, plus an overview page.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
