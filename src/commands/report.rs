//! Report command implementation.
//!
//! The report command:
//! 1. Loads the postings table
//! 2. Loads the country reference table
//! 3. Resolves the date range and conversion rates
//! 4. Enriches every posting
//! 5. Filters and aggregates
//! 6. Writes the report

use crate::context::PipelineContext;
use crate::currency::{resolve_rates, FixedRateSource, HttpRateSource, RateSource};
use crate::enrich::{enrich_all, posted_dates};
use crate::filter::{filter, DateRange};
use crate::loader::{load_records, RawRecord};
use crate::output::write_report;
use crate::reference::ReferenceTable;
use crate::report::{render_summary, DashboardTables, Report, TableOptions};
use crate::utils::config::{DEFAULT_RATE_API_URL, DEFAULT_TOP_N, REFERENCE_CURRENCY};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Postings CSV
    pub input: PathBuf,

    /// GeoJSON feature collection with country names and ISO-3 codes
    pub geography: PathBuf,

    /// First day of the selection (defaults to the earliest posting)
    pub start: Option<NaiveDate>,

    /// Last day of the selection (defaults to the latest posting)
    pub end: Option<NaiveDate>,

    /// Category for the sub-category breakdown
    pub category: Option<String>,

    /// Output path for the JSON report
    pub output: PathBuf,

    /// Base URL of the exchange rate API
    pub rate_api: String,

    /// Fixed rates into the reference currency; disables the rate API
    pub fixed_rates: Vec<(String, f64)>,

    /// Currency budgets are normalized to
    pub reference_currency: String,

    /// Length of the top-N lists
    pub top_n: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("projects.csv"),
            geography: PathBuf::from("countries.geojson"),
            start: None,
            end: None,
            category: None,
            output: PathBuf::from("report.json"),
            rate_api: DEFAULT_RATE_API_URL.to_string(),
            fixed_rates: Vec::new(),
            reference_currency: REFERENCE_CURRENCY.to_string(),
            top_n: DEFAULT_TOP_N,
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// Any enrichment failure aborts the run before anything is written.
///
/// # Errors
/// * Input or geography files unreadable or malformed
/// * Invalid date range
/// * Conversion rate unavailable for the range start
/// * Unknown country, unsupported currency or malformed posting
/// * File write errors
pub fn execute_report(args: &ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Building report from: {}", args.input.display());

    // Step 1: Load postings
    info!("Step 1/6: Loading postings...");
    let raws = load_records(&args.input)
        .with_context(|| format!("Failed to load postings from {}", args.input.display()))?;

    if raws.is_empty() {
        anyhow::bail!("Input file {} contains no postings", args.input.display());
    }

    // Step 2: Load reference geography
    info!("Step 2/6: Loading country reference table...");
    let reference = ReferenceTable::from_geojson(&args.geography).with_context(|| {
        format!("Failed to load geography from {}", args.geography.display())
    })?;

    debug!(
        "Reference table: {} countries, {} overrides",
        reference.base_len(),
        reference.override_len()
    );

    // Step 3: Resolve range and rates
    info!("Step 3/6: Resolving date range and conversion rates...");
    let range = resolve_range(&raws, args.start, args.end)?;
    info!("Date range: {}", range);

    let currencies: BTreeSet<String> = raws.iter().map(|r| r.currency.clone()).collect();
    let source = build_rate_source(args)?;
    let rates = resolve_rates(
        &*source,
        range.start(),
        &currencies,
        &args.reference_currency,
    )
    .context("Failed to resolve conversion rates")?;

    let context = PipelineContext::new(reference, rates);

    // Step 4: Enrich
    info!("Step 4/6: Enriching {} postings...", raws.len());
    let enriched = enrich_all(&raws, &context).context("Failed to enrich postings")?;

    // Step 5: Filter and aggregate
    info!("Step 5/6: Filtering and aggregating...");
    let all: Vec<_> = enriched.iter().collect();
    let selection = filter(&enriched, &range);

    info!("{} of {} postings fall in {}", selection.len(), all.len(), range);

    let options = TableOptions {
        top_n: args.top_n,
        selected_category: args.category.clone(),
        reference_currency: context.rates().reference_currency.clone(),
    };
    let tables = DashboardTables::build(&all, &selection, &options);

    // Step 6: Write
    info!("Step 6/6: Writing report...");
    let report = Report::new(
        args.input.display().to_string(),
        range,
        context.rates().clone(),
        enriched.len(),
        tables,
    );

    write_report(&report, &args.output).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("FREELANCE PROJECTS SUMMARY ({})", report.range);
        println!("{}", "=".repeat(80));
        print!("{}", render_summary(&report.tables));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Work out the active range from the arguments and the data
///
/// Missing bounds default to the earliest/latest posting date.
fn resolve_range(
    raws: &[RawRecord],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<DateRange> {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        (start, end) => {
            let dates = posted_dates(raws).context("Failed to read posting dates")?;
            let span = DateRange::covering(dates)
                .context("Cannot derive a date range without postings")?;
            (start.unwrap_or(span.start()), end.unwrap_or(span.end()))
        }
    };

    DateRange::new(start, end)
        .context("Please pick a start date on or before the end date")
}

/// Fixed rates when any were given, otherwise the HTTP API
fn build_rate_source(args: &ReportArgs) -> Result<Box<dyn RateSource>> {
    if args.fixed_rates.is_empty() {
        let client = HttpRateSource::new(&args.rate_api).context("Failed to create rate client")?;
        return Ok(Box::new(client));
    }

    debug!("Using {} fixed rate(s)", args.fixed_rates.len());

    let source = args
        .fixed_rates
        .iter()
        .fold(FixedRateSource::new(&args.reference_currency), |source, (currency, rate)| {
            source.with_rate(currency, *rate)
        });

    Ok(Box::new(source))
}

/// Parse a `CUR=RATE` command-line value
///
/// **Public** - clap value parser for `--rate`
pub fn parse_rate(value: &str) -> std::result::Result<(String, f64), String> {
    let (currency, rate) = value
        .split_once('=')
        .ok_or_else(|| format!("expected CUR=RATE, got '{}'", value))?;

    let currency = currency.trim().to_ascii_uppercase();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("'{}' is not a 3-letter currency code", currency));
    }

    let rate: f64 = rate
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", rate.trim()))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(format!("rate must be positive, got {}", rate));
    }

    Ok((currency, rate))
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.geography.as_os_str().is_empty() {
        anyhow::bail!("Geography path cannot be empty");
    }

    if args.fixed_rates.is_empty()
        && !args.rate_api.starts_with("http://")
        && !args.rate_api.starts_with("https://")
    {
        anyhow::bail!("Rate API URL must start with http:// or https://");
    }

    let currency = &args.reference_currency;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        anyhow::bail!("Reference currency must be a 3-letter code");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > 100 {
        anyhow::bail!("top is too large (max 100)");
    }

    if let (Some(start), Some(end)) = (args.start, args.end) {
        DateRange::new(start, end)
            .context("Please pick a start date on or before the end date")?;
    }

    Ok(())
}
