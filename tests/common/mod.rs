#![allow(dead_code)]

use chrono::NaiveDate;
use freelance_insights::currency::ConversionRateSet;
use freelance_insights::enrich::{enrich, EnrichedRecord};
use freelance_insights::context::PipelineContext;
use freelance_insights::loader::{ProjectType, RawRecord};
use freelance_insights::reference::ReferenceTable;

pub fn context() -> PipelineContext {
    let reference = ReferenceTable::from_pairs([
        ("India", "IND"),
        ("United Kingdom", "GBR"),
        ("Germany", "DEU"),
        ("Russia", "RUS"),
    ]);
    let rates = ConversionRateSet::new(
        "USD",
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        [("GBP".to_string(), 1.2), ("EUR".to_string(), 1.1)],
    );
    PipelineContext::new(reference, rates)
}

/// Builder for enriched test records
pub struct Posting {
    raw: RawRecord,
}

impl Posting {
    pub fn new(row: usize, category: &str) -> Self {
        Self {
            raw: RawRecord {
                row,
                title: format!("Project {}", row),
                category: category.to_string(),
                sub_category: format!("{} General", category),
                client_country: "India".to_string(),
                experience: "Entry (0-2 yrs)".to_string(),
                budget: 100.0,
                currency: "USD".to_string(),
                project_type: ProjectType::FixedPrice,
                date_posted: "2023-02-01 10:00:00".to_string(),
                client_registration_date: None,
                extra: Vec::new(),
            },
        }
    }

    pub fn sub_category(mut self, sub_category: &str) -> Self {
        self.raw.sub_category = sub_category.to_string();
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.raw.client_country = country.to_string();
        self
    }

    pub fn experience(mut self, experience: &str) -> Self {
        self.raw.experience = experience.to_string();
        self
    }

    pub fn budget(mut self, budget: f64, currency: &str) -> Self {
        self.raw.budget = budget;
        self.raw.currency = currency.to_string();
        self
    }

    pub fn hourly(mut self) -> Self {
        self.raw.project_type = ProjectType::Hourly;
        self
    }

    pub fn posted(mut self, date_posted: &str) -> Self {
        self.raw.date_posted = date_posted.to_string();
        self
    }

    pub fn raw(self) -> RawRecord {
        self.raw
    }

    pub fn build(self) -> EnrichedRecord {
        enrich(&self.raw, &context()).expect("test posting should enrich")
    }
}

pub fn refs(records: &[EnrichedRecord]) -> Vec<&EnrichedRecord> {
    records.iter().collect()
}
