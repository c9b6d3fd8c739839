//! Enriched posting record.

use super::calendar::{Month, Weekday};
use crate::loader::{ProjectType, RawRecord};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A `RawRecord` plus every derived field
///
/// Built once per raw record by `enrich` and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// Source record, untouched
    pub raw: RawRecord,

    /// ISO-3 code of the client country
    pub iso_code: String,

    /// Experience level without its parenthetical qualifier
    pub experience: String,

    /// Parsed "Date Posted" (wall-clock time as written)
    pub posted_at: NaiveDateTime,

    /// Calendar date of `posted_at`
    pub date: NaiveDate,

    pub day: Weekday,

    /// Hour of day, 0-23
    pub hour: u32,

    pub month: Month,

    /// Budget converted to the reference currency
    pub budget_reference: f64,
}

impl EnrichedRecord {
    pub fn row(&self) -> usize {
        self.raw.row
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    pub fn category(&self) -> &str {
        &self.raw.category
    }

    pub fn sub_category(&self) -> &str {
        &self.raw.sub_category
    }

    pub fn client_country(&self) -> &str {
        &self.raw.client_country
    }

    pub fn project_type(&self) -> ProjectType {
        self.raw.project_type
    }
}
