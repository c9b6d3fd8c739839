//! Aggregation of enriched records into summary tables.
//!
//! Every query takes the subset it should run over (full data set or the
//! range-filtered selection); callers decide which.
//!
//! This module provides:
//! - Group counts over one or more dimensions
//! - Top-N rankings with first-seen tie-breaking
//! - Extremal (max/min) records
//! - Per-group means

pub mod dimension;
pub mod grouping;
pub mod ranking;

// Re-export main types and functions
pub use dimension::{Dimension, FieldValue, NumericField};
pub use grouping::{group_count, group_mean, GroupCount, GroupMean};
pub use ranking::{extremal, top_n, value_counts, Direction};
