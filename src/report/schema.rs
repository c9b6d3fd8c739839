//! Output JSON schema for dashboard reports.
//!
//! Schema is versioned to allow future evolution.

use super::tables::DashboardTables;
use crate::currency::ConversionRateSet;
use crate::filter::DateRange;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input file the report was built from
    pub source: String,

    /// Active date range (inclusive)
    pub range: DateRange,

    /// Rates used for every budget conversion in this run
    pub rates: ConversionRateSet,

    /// Number of postings after de-duplication
    pub total_records: usize,

    pub tables: DashboardTables,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl Report {
    pub fn new(
        source: impl Into<String>,
        range: DateRange,
        rates: ConversionRateSet,
        total_records: usize,
        tables: DashboardTables,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            range,
            rates,
            total_records,
            tables,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
