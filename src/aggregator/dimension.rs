//! Grouping dimensions and the values they produce.

use crate::enrich::{EnrichedRecord, Month, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of `EnrichedRecord` that records can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Category,
    SubCategory,
    Country,
    IsoCode,
    Experience,
    ProjectType,
    Day,
    Hour,
    Month,
}

impl Dimension {
    /// Column label used in output tables
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Category => "Category Name",
            Dimension::SubCategory => "Sub Category Name",
            Dimension::Country => "Client Country",
            Dimension::IsoCode => "iso_alpha",
            Dimension::Experience => "Experience",
            Dimension::ProjectType => "Type",
            Dimension::Day => "Day",
            Dimension::Hour => "Hour",
            Dimension::Month => "Month",
        }
    }

    /// Value of this dimension for a record
    pub fn value(&self, record: &EnrichedRecord) -> FieldValue {
        match self {
            Dimension::Category => FieldValue::Text(record.raw.category.clone()),
            Dimension::SubCategory => FieldValue::Text(record.raw.sub_category.clone()),
            Dimension::Country => FieldValue::Text(record.raw.client_country.clone()),
            Dimension::IsoCode => FieldValue::Text(record.iso_code.clone()),
            Dimension::Experience => FieldValue::Text(record.experience.clone()),
            Dimension::ProjectType => FieldValue::Text(record.raw.project_type.to_string()),
            Dimension::Day => FieldValue::Day(record.day),
            Dimension::Hour => FieldValue::Hour(record.hour),
            Dimension::Month => FieldValue::Month(record.month),
        }
    }

    /// Full value domain for closed dimensions, in display order
    ///
    /// `None` for free-text dimensions, whose groups only exist when observed.
    pub fn fixed_domain(&self) -> Option<Vec<FieldValue>> {
        match self {
            Dimension::Day => Some(Weekday::ALL.iter().copied().map(FieldValue::Day).collect()),
            Dimension::Month => Some(Month::ALL.iter().copied().map(FieldValue::Month).collect()),
            Dimension::Hour => Some((0..24).map(FieldValue::Hour).collect()),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A group key component
///
/// Values of one dimension always share a variant, so the derived `Ord`
/// gives display order: weekdays Monday first, months January first, hours
/// numerically, text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Day(Weekday),
    Month(Month),
    Hour(u32),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Day(day) => write!(f, "{}", day),
            FieldValue::Month(month) => write!(f, "{}", month),
            FieldValue::Hour(hour) => write!(f, "{}", hour),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

/// Numeric field used by extremal and mean queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// Budget in the posting's own currency
    Budget,
    /// Budget converted to the reference currency
    BudgetReference,
    Hour,
}

impl NumericField {
    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Budget => "Budget",
            NumericField::BudgetReference => "Budget_USD",
            NumericField::Hour => "Hour",
        }
    }

    pub fn value(&self, record: &EnrichedRecord) -> f64 {
        match self {
            NumericField::Budget => record.raw.budget,
            NumericField::BudgetReference => record.budget_reference,
            NumericField::Hour => f64::from(record.hour),
        }
    }
}
