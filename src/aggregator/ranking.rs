//! Top-N rankings and extremal records.

use super::dimension::{Dimension, FieldValue, NumericField};
use crate::enrich::EnrichedRecord;
use crate::loader::ProjectType;
use crate::utils::error::AggregateError;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Which end of the ordering `extremal` picks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    High,
    Low,
}

/// Counts per value, highest first
///
/// Equal counts keep the order in which the values first appear in
/// `records`.
pub fn value_counts(records: &[&EnrichedRecord], dimension: Dimension) -> Vec<(FieldValue, usize)> {
    let mut position: HashMap<FieldValue, usize> = HashMap::new();
    let mut counts: Vec<(FieldValue, usize)> = Vec::new();

    for record in records {
        let value = dimension.value(record);
        match position.get(&value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `n` most frequent values of a dimension
///
/// **Public** - used for the "top 3" KPI lists
///
/// Returns fewer than `n` values when fewer distinct values exist; the list
/// is never padded.
pub fn top_n(records: &[&EnrichedRecord], dimension: Dimension, n: usize) -> Vec<FieldValue> {
    let ranked: Vec<FieldValue> = value_counts(records, dimension)
        .into_iter()
        .take(n)
        .map(|(value, _)| value)
        .collect();

    debug!("Top {} by {}: {:?}", n, dimension, ranked);

    ranked
}

/// Record with the highest or lowest value of `field`
///
/// **Public** - used for the highest/lowest budget KPIs
///
/// Records whose project type equals `exclude` are not eligible (hourly
/// postings have no comparable total budget). Among equal values the first
/// eligible record wins.
///
/// # Errors
/// * `AggregateError::NoEligibleRecords` - nothing left after exclusion
pub fn extremal<'a>(
    records: &[&'a EnrichedRecord],
    field: NumericField,
    direction: Direction,
    exclude: Option<ProjectType>,
) -> Result<&'a EnrichedRecord, AggregateError> {
    let wanted = match direction {
        Direction::High => Ordering::Greater,
        Direction::Low => Ordering::Less,
    };

    let mut best: Option<&'a EnrichedRecord> = None;

    for &record in records {
        if Some(record.project_type()) == exclude {
            continue;
        }
        best = match best {
            Some(current) if field.value(record).total_cmp(&field.value(current)) != wanted => {
                Some(current)
            }
            _ => Some(record),
        };
    }

    best.ok_or_else(|| AggregateError::NoEligibleRecords {
        field: field.label().to_string(),
        excluded: exclude.map_or_else(|| "none".to_string(), |t| t.to_string()),
    })
}
