//! Inclusive date ranges and the range filter.

use crate::enrich::EnrichedRecord;
use crate::utils::error::FilterError;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive calendar date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    ///
    /// Bounds are never swapped; the caller has to ask for a corrected range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Smallest range containing every date, `None` when there are none
    pub fn covering<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().fold(None, |acc, date| match acc {
            None => Some(Self { start: date, end: date }),
            Some(range) => Some(Self {
                start: range.start.min(date),
                end: range.end.max(date),
            }),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Records whose calendar date lies inside `range`, in input order
pub fn filter<'a, I>(records: I, range: &DateRange) -> Vec<&'a EnrichedRecord>
where
    I: IntoIterator<Item = &'a EnrichedRecord>,
{
    let selected: Vec<&EnrichedRecord> = records
        .into_iter()
        .filter(|record| range.contains(record.date))
        .collect();

    debug!("Range {} selected {} records", range, selected.len());

    selected
}

/// Validate the bounds and filter in one step
///
/// # Errors
/// * `FilterError::InvalidRange` - `start > end`; nothing is returned
pub fn filter_between<'a, I>(
    records: I,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<&'a EnrichedRecord>, FilterError>
where
    I: IntoIterator<Item = &'a EnrichedRecord>,
{
    let range = DateRange::new(start, end)?;
    Ok(filter(records, &range))
}
