//! Raw posting record as read from the input table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Billing model of a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Single agreed total budget
    FixedPrice,
    /// Hourly rate, no comparable total
    Hourly,
}

impl ProjectType {
    /// Label used in the input file
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::FixedPrice => "fixed_price",
            ProjectType::Hourly => "hourly",
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed_price" => Ok(ProjectType::FixedPrice),
            "hourly" => Ok(ProjectType::Hourly),
            other => Err(format!("expected 'fixed_price' or 'hourly', got '{}'", other)),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job posting as ingested
///
/// Immutable once loaded; enrichment copies it into an `EnrichedRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based data row number in the input file
    pub row: usize,

    pub title: String,

    pub category: String,

    pub sub_category: String,

    /// Free-text client country
    pub client_country: String,

    /// Free-text experience level, may carry a parenthetical qualifier
    pub experience: String,

    /// Budget in `currency`
    pub budget: f64,

    /// Upper-cased currency code
    pub currency: String,

    pub project_type: ProjectType,

    /// Unparsed "Date Posted" cell
    pub date_posted: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_registration_date: Option<String>,

    /// Remaining descriptive columns, in input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl RawRecord {
    /// Look up a passthrough column by header name
    pub fn extra_field(&self, name: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_from_str() {
        assert_eq!("fixed_price".parse::<ProjectType>(), Ok(ProjectType::FixedPrice));
        assert_eq!(" Hourly ".parse::<ProjectType>(), Ok(ProjectType::Hourly));
        assert!("retainer".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_project_type_display() {
        assert_eq!(ProjectType::FixedPrice.to_string(), "fixed_price");
        assert_eq!(ProjectType::Hourly.to_string(), "hourly");
    }
}
