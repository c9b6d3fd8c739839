//! Group-by counts and means.

use super::dimension::{Dimension, FieldValue, NumericField};
use crate::enrich::EnrichedRecord;
use crate::loader::ProjectType;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One row of a group-count table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    /// Key components, one per grouping dimension
    pub key: Vec<FieldValue>,
    pub count: usize,
}

/// One row of a group-mean table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    pub key: FieldValue,
    pub mean: f64,
    /// Records that contributed to the mean
    pub count: usize,
}

/// Count records per key tuple
///
/// **Public** - main entry point for grouped counts
///
/// Closed dimensions (day, hour, month) contribute their whole domain, so a
/// weekday without postings still gets a row with count 0. Free-text
/// dimensions contribute only the value combinations that occur. For a
/// composite key such as (day, category) the result is every weekday for
/// every observed category.
///
/// Rows are ordered by key: closed domains in display order, text
/// lexicographically.
pub fn group_count(records: &[&EnrichedRecord], dimensions: &[Dimension]) -> Vec<GroupCount> {
    let mut counts: HashMap<Vec<FieldValue>, usize> = HashMap::new();
    let mut observed_free: BTreeSet<Vec<FieldValue>> = BTreeSet::new();

    for record in records {
        let key: Vec<FieldValue> = dimensions.iter().map(|d| d.value(record)).collect();
        observed_free.insert(free_components(dimensions, &key));
        *counts.entry(key).or_insert(0) += 1;
    }

    let has_free = dimensions.iter().any(|d| d.fixed_domain().is_none());
    if !has_free {
        // the empty tuple stands for "no free-text components"
        observed_free.insert(Vec::new());
    }

    let mut rows: BTreeMap<Vec<FieldValue>, usize> = BTreeMap::new();
    for fixed in fixed_product(dimensions) {
        for free in &observed_free {
            let key = interleave(dimensions, &fixed, free);
            let count = counts.get(&key).copied().unwrap_or(0);
            rows.insert(key, count);
        }
    }

    debug!(
        "Grouped {} records by {:?} into {} rows",
        records.len(),
        dimensions,
        rows.len()
    );

    rows.into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

/// Mean of a numeric field per observed key
///
/// Records whose project type equals `exclude` are left out before
/// grouping. Keys with no remaining records do not appear.
pub fn group_mean(
    records: &[&EnrichedRecord],
    dimension: Dimension,
    field: NumericField,
    exclude: Option<ProjectType>,
) -> Vec<GroupMean> {
    let mut sums: BTreeMap<FieldValue, (f64, usize)> = BTreeMap::new();

    for record in records {
        if Some(record.project_type()) == exclude {
            continue;
        }
        let entry = sums.entry(dimension.value(record)).or_insert((0.0, 0));
        entry.0 += field.value(record);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key,
            mean: sum / count as f64,
            count,
        })
        .collect()
}

/// Components of `key` that belong to free-text dimensions
fn free_components(dimensions: &[Dimension], key: &[FieldValue]) -> Vec<FieldValue> {
    dimensions
        .iter()
        .zip(key)
        .filter(|(d, _)| d.fixed_domain().is_none())
        .map(|(_, v)| v.clone())
        .collect()
}

/// Cartesian product of the closed domains, in dimension order
fn fixed_product(dimensions: &[Dimension]) -> Vec<Vec<FieldValue>> {
    dimensions
        .iter()
        .filter_map(Dimension::fixed_domain)
        .fold(vec![Vec::new()], |partials, domain| {
            partials
                .iter()
                .flat_map(|partial| {
                    domain.iter().map(move |value| {
                        let mut next = partial.clone();
                        next.push(value.clone());
                        next
                    })
                })
                .collect()
        })
}

/// Merge closed and free components back into dimension order
fn interleave(dimensions: &[Dimension], fixed: &[FieldValue], free: &[FieldValue]) -> Vec<FieldValue> {
    let mut fixed = fixed.iter();
    let mut free = free.iter();

    dimensions
        .iter()
        .filter_map(|d| {
            if d.fixed_domain().is_some() {
                fixed.next().cloned()
            } else {
                free.next().cloned()
            }
        })
        .collect()
}
