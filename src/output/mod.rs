//! Output writers for dashboard reports.
//!
//! This module handles writing reports to disk as pretty JSON and reading
//! them back for validation.

pub mod json;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
