//! Currency normalization.
//!
//! Rates are resolved once per run, for a single reference date, and
//! reused for every record regardless of when it was posted.
//!
//! This module handles:
//! - The `RateSource` seam (HTTP service or fixed table)
//! - Resolving the run's `ConversionRateSet`

pub mod client;
pub mod rates;
pub mod source;
pub mod types;

// Re-export main types and functions
pub use client::HttpRateSource;
pub use rates::{resolve_rates, ConversionRateSet};
pub use source::{FixedRateSource, RateSource};
