use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Range: {}", report.range);
    println!(
        "  Reference: {} ({} rate(s) on {})",
        report.rates.reference_currency,
        report.rates.rates.len(),
        report.rates.reference_date
    );
    println!("  Postings: {}", report.total_records);
    println!("  Selected: {}", report.tables.total_projects);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Freelance Insights Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Input file");
        println!("  range: object            - Active date range (start, end; inclusive)");
        println!("  rates: object            - Conversion rates used for this run");
        println!("    reference_currency     - Currency budgets are normalized to");
        println!("    reference_date         - Date the rates were quoted for");
        println!("    rates                  - Currency -> rate");
        println!("  total_records: number    - Postings after de-duplication");
        println!("  tables: object           - Dashboard tables");
        println!("    total_projects         - Postings in range");
        println!("    top_*                  - Top categories / sub categories / countries");
        println!("    highest_budget         - Fixed-price project with highest budget (or null)");
        println!("    lowest_budget          - Fixed-price project with lowest budget (or null)");
        println!("    projects_by_day*       - Counts by weekday (all postings)");
        println!("    projects_by_hour*      - Counts by hour (all postings)");
        println!("    projects_by_category   - Counts by category (in range)");
        println!("    average_fixed_budget_by_category - Mean fixed-price budget (in range)");
        println!("    sub_categories         - Sub category counts for one category (in range)");
        println!("    projects_by_experience - Counts by experience level (in range)");
        println!("    projects_by_country    - Counts by (country, iso code) (in range)");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Freelance Insights v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Enrichment and aggregation pipeline for freelance project postings.");
}
