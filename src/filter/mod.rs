//! Date range selection over enriched records.

pub mod range;

pub use range::{filter, filter_between, DateRange};
