//! Display formatting for terminal output
//!
//! Provides utilities for formatting report results for terminal display:
//! tables, money cells, percentages.

pub mod report;
pub mod table;

pub use report::{format_bar, format_millions, format_percentage};
pub use table::{
    money_cell, record_cells, render_filtered_table, render_quarterly_totals, render_raw_table,
    render_trend_table,
};
