//! Country reference data.
//!
//! This module handles:
//! - Reading the geography feature collection
//! - Resolving free-text client countries to ISO-3 codes
//! - Manual overrides for naming mismatches

pub mod geography;
pub mod resolver;

// Re-export main types
pub use geography::{load_geography, parse_geography};
pub use resolver::ReferenceTable;
