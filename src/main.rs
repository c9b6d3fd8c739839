//! Freelance Insights CLI
//!
//! Builds the freelance projects dashboard report from a postings table.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use freelance_insights::commands::{
    display_schema, display_version, execute_report, parse_rate, validate_args,
    validate_report_file, ReportArgs,
};
use freelance_insights::utils::config::{DEFAULT_RATE_API_URL, REFERENCE_CURRENCY};

/// Freelance Insights - dashboard tables for freelance project postings
#[derive(Parser, Debug)]
#[command(name = "freelance-insights")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Enrich, filter and aggregate a postings file into a report
    Report {
        /// Postings CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// GeoJSON feature collection with country names and ISO-3 codes
        #[arg(short, long)]
        geography: PathBuf,

        /// First day of the range, YYYY-MM-DD (defaults to earliest posting)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day of the range, YYYY-MM-DD (defaults to latest posting)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Category for the sub-category breakdown
        #[arg(short, long)]
        category: Option<String>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Exchange rate API base URL
        #[arg(long, env = "RATE_API_URL", default_value = DEFAULT_RATE_API_URL)]
        rate_api: String,

        /// Fixed conversion rate, e.g. GBP=1.21 (repeatable; disables the rate API)
        #[arg(long = "rate", value_parser = parse_rate)]
        rates: Vec<(String, f64)>,

        /// Currency all budgets are converted to
        #[arg(long, default_value = REFERENCE_CURRENCY)]
        reference_currency: String,

        /// Number of entries in the top lists
        #[arg(long, default_value = "3")]
        top: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            input,
            geography,
            start,
            end,
            category,
            output,
            rate_api,
            rates,
            reference_currency,
            top,
            summary,
        } => {
            let args = ReportArgs {
                input,
                geography,
                start,
                end,
                category,
                output,
                rate_api,
                fixed_rates: rates,
                reference_currency: reference_currency.to_ascii_uppercase(),
                top_n: top,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
