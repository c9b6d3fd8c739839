//! Freelance Insights
//!
//! Enrichment and aggregation pipeline behind the freelance projects
//! dashboard. Postings are loaded from CSV, enriched with ISO country codes,
//! calendar fields and budgets in a single reference currency, filtered by
//! date range and reduced to the tables the dashboard renders.
//!
//! This crate provides the core implementation for the
//! `freelance-insights` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! freelance-insights report --input projects.csv --geography countries.geojson --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod context;
pub mod currency;
pub mod enrich;
pub mod filter;
pub mod loader;
pub mod output;
pub mod reference;
pub mod report;
pub mod utils;
