//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building or querying the country reference table
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to read geography source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Geography source is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid geography source: {0}")]
    InvalidFormat(String),

    #[error("Country name is empty")]
    EmptyName,

    #[error("Unknown country: '{0}'")]
    UnknownCountry(String),
}

/// Errors that can occur while reading the input table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: '{0}'")]
    MissingColumn(String),

    #[error("Row {row}: malformed {field} '{value}': {reason}")]
    MalformedRecord {
        row: usize,
        field: String,
        value: String,
        reason: String,
    },
}

/// Errors that abort the enrichment phase
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Row {row}: unknown client country '{country}'")]
    UnknownCountry { row: usize, country: String },

    #[error("Row {row}: no conversion rate for currency '{currency}'")]
    UnsupportedCurrency { row: usize, currency: String },

    #[error("Row {row}: malformed {field} '{value}': {reason}")]
    MalformedRecord {
        row: usize,
        field: String,
        value: String,
        reason: String,
    },
}

/// Errors that can occur while resolving conversion rates
#[derive(Error, Debug)]
pub enum RateError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid rate response: {0}")]
    InvalidResponse(String),

    #[error("No {from}->{to} rate available for {date}: {reason}")]
    RateUnavailable {
        from: String,
        to: String,
        date: NaiveDate,
        reason: String,
    },
}

/// Errors raised by the range filter
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Errors raised by aggregation queries
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("No eligible records for {field} (excluded: {excluded})")]
    NoEligibleRecords { field: String, excluded: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
