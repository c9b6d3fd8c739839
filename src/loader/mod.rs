//! Input table loading.
//!
//! This module handles:
//! - Reading the postings CSV
//! - Validating numeric and enumerated columns
//! - Dropping exact duplicate rows

pub mod csv_reader;
pub mod record;

// Re-export main types and functions
pub use csv_reader::{load_records, read_records};
pub use record::{ProjectType, RawRecord};
