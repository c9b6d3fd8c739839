//! Record enrichment.
//!
//! This module turns `RawRecord`s into `EnrichedRecord`s:
//! - ISO-3 code for the client country
//! - Experience level with the qualifier stripped
//! - Calendar fields derived from the posting timestamp
//! - Budget converted to the reference currency

pub mod calendar;
pub mod enricher;
pub mod record;

// Re-export main types and functions
pub use calendar::{Month, Weekday};
pub use enricher::{enrich, enrich_all, normalize_experience, parse_timestamp, posted_dates};
pub use record::EnrichedRecord;
