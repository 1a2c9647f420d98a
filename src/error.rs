//! Custom error types for findash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Load-time failures are fatal to the
//! session; `NoRevenue` is recoverable at the view level.

use thiserror::Error;

/// The main error type for findash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Data source missing or unreadable
    #[error("Load error: {0}")]
    Load(String),

    /// Required column absent from the data source
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    /// A cell could not be parsed into the expected type
    #[error("Invalid value in column '{column}' on row {row}: {message}")]
    InvalidCell {
        column: String,
        row: usize,
        message: String,
    },

    /// No revenue recorded for the requested year (annual margin query)
    #[error("No revenue found for {year}; check the revenue accounts. Available accounts: {}", available_accounts.join(", "))]
    NoRevenue {
        year: i32,
        available_accounts: Vec<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl DashError {
    /// Create a load error for a missing or unreadable source file
    pub fn source_unreadable(path: impl std::fmt::Display, cause: impl std::fmt::Display) -> Self {
        Self::Load(format!("cannot read '{}': {}", path, cause))
    }

    /// Check if this is a recoverable query-level error
    pub fn is_no_revenue(&self) -> bool {
        matches!(self, Self::NoRevenue { .. })
    }

    /// Check if this error is fatal to the session (anything load/config side)
    pub fn is_fatal(&self) -> bool {
        !self.is_no_revenue()
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        Self::Load(err.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for findash operations
pub type DashResult<T> = Result<T, DashError>;
