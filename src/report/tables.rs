//! The set of derived tables behind the dashboard.
//!
//! Day and hour breakdowns run over the full data set; everything else runs
//! over the date-range selection.

use crate::aggregator::{
    extremal, group_count, group_mean, top_n, Dimension, Direction, FieldValue, GroupCount,
    GroupMean, NumericField,
};
use crate::enrich::EnrichedRecord;
use crate::loader::ProjectType;
use crate::utils::config::{DEFAULT_TOP_N, REFERENCE_CURRENCY};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Knobs for table construction
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Length of the top-N lists
    pub top_n: usize,

    /// Category for the sub-category breakdown (first category seen if None)
    pub selected_category: Option<String>,

    /// Currency the budget figures are expressed in
    pub reference_currency: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            selected_category: None,
            reference_currency: REFERENCE_CURRENCY.to_string(),
        }
    }
}

/// Highest/lowest budget KPI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHighlight {
    /// Budget in the reference currency, rounded to cents
    pub budget: f64,
    pub currency: String,
    pub category: String,
    pub sub_category: String,
    pub title: String,
    /// Input row of the posting
    pub row: usize,
}

impl ProjectHighlight {
    fn from_record(record: &EnrichedRecord, currency: &str) -> Self {
        Self {
            budget: round_cents(record.budget_reference),
            currency: currency.to_string(),
            category: record.category().to_string(),
            sub_category: record.sub_category().to_string(),
            title: record.title().to_string(),
            row: record.row(),
        }
    }
}

/// Sub-category counts inside one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategoryBreakdown {
    pub category: String,
    pub rows: Vec<GroupCount>,
}

/// Every table the dashboard renders for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTables {
    pub total_projects: usize,

    pub top_categories: Vec<String>,
    pub top_sub_categories: Vec<String>,
    pub top_client_countries: Vec<String>,

    /// Fixed-price project with the highest budget (null when none)
    pub highest_budget: Option<ProjectHighlight>,
    /// Fixed-price project with the lowest budget (null when none)
    pub lowest_budget: Option<ProjectHighlight>,

    // full data set
    pub projects_by_day: Vec<GroupCount>,
    pub projects_by_day_and_category: Vec<GroupCount>,
    pub projects_by_hour: Vec<GroupCount>,
    pub projects_by_hour_and_category: Vec<GroupCount>,

    // selection
    pub projects_by_category: Vec<GroupCount>,
    pub average_fixed_budget_by_category: Vec<GroupMean>,
    pub sub_categories: Option<SubCategoryBreakdown>,
    pub projects_by_experience: Vec<GroupCount>,
    pub projects_by_country: Vec<GroupCount>,
}

impl DashboardTables {
    /// Build all tables
    ///
    /// **Public** - main entry point for table assembly
    ///
    /// # Arguments
    /// * `all` - every enriched record
    /// * `selection` - records inside the active date range
    /// * `options` - top-N length, selected category, currency label
    pub fn build(
        all: &[&EnrichedRecord],
        selection: &[&EnrichedRecord],
        options: &TableOptions,
    ) -> Self {
        debug!(
            "Building tables from {} records ({} selected)",
            all.len(),
            selection.len()
        );

        let currency = options.reference_currency.as_str();

        let highest_budget = fixed_price_extremal(selection, Direction::High, currency);
        let lowest_budget = fixed_price_extremal(selection, Direction::Low, currency);

        let sub_categories = options
            .selected_category
            .clone()
            .or_else(|| all.first().map(|r| r.category().to_string()))
            .map(|category| sub_category_breakdown(selection, category));

        Self {
            total_projects: selection.len(),
            top_categories: top_labels(selection, Dimension::Category, options.top_n),
            top_sub_categories: top_labels(selection, Dimension::SubCategory, options.top_n),
            top_client_countries: top_labels(selection, Dimension::Country, options.top_n),
            highest_budget,
            lowest_budget,
            projects_by_day: group_count(all, &[Dimension::Day]),
            projects_by_day_and_category: group_count(all, &[Dimension::Day, Dimension::Category]),
            projects_by_hour: group_count(all, &[Dimension::Hour]),
            projects_by_hour_and_category: group_count(all, &[Dimension::Hour, Dimension::Category]),
            projects_by_category: group_count(selection, &[Dimension::Category]),
            average_fixed_budget_by_category: group_mean(
                selection,
                Dimension::Category,
                NumericField::BudgetReference,
                Some(ProjectType::Hourly),
            ),
            sub_categories,
            projects_by_experience: group_count(selection, &[Dimension::Experience]),
            projects_by_country: group_count(selection, &[Dimension::Country, Dimension::IsoCode]),
        }
    }
}

fn top_labels(records: &[&EnrichedRecord], dimension: Dimension, n: usize) -> Vec<String> {
    top_n(records, dimension, n)
        .iter()
        .map(FieldValue::to_string)
        .collect()
}

fn fixed_price_extremal(
    records: &[&EnrichedRecord],
    direction: Direction,
    currency: &str,
) -> Option<ProjectHighlight> {
    match extremal(
        records,
        NumericField::BudgetReference,
        direction,
        Some(ProjectType::Hourly),
    ) {
        Ok(record) => Some(ProjectHighlight::from_record(record, currency)),
        Err(e) => {
            warn!("{:?} budget table left empty: {}", direction, e);
            None
        }
    }
}

fn sub_category_breakdown(records: &[&EnrichedRecord], category: String) -> SubCategoryBreakdown {
    let in_category: Vec<&EnrichedRecord> = records
        .iter()
        .copied()
        .filter(|r| r.category() == category)
        .collect();

    SubCategoryBreakdown {
        rows: group_count(&in_category, &[Dimension::SubCategory]),
        category,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
