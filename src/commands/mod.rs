//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod report;
pub mod utils;

// Re-export main command functions
pub use report::{execute_report, parse_rate, validate_args, ReportArgs};
pub use utils::{display_schema, display_version, validate_report_file};
