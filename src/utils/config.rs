//! Configuration and constants for the pipeline and CLI.

use std::time::Duration;

/// Default timeout for rate source requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Currency every budget is normalized to
pub const REFERENCE_CURRENCY: &str = "USD";

/// Frankfurter-compatible endpoint used when no `--rate` overrides are given
pub const DEFAULT_RATE_API_URL: &str = "https://api.frankfurter.app";

/// Number of entries in the "top N" KPI tables
pub const DEFAULT_TOP_N: usize = 3;

// Column headers of the input file
pub const COL_TITLE: &str = "Title";
pub const COL_CATEGORY: &str = "Category Name";
pub const COL_SUB_CATEGORY: &str = "Sub Category Name";
pub const COL_COUNTRY: &str = "Client Country";
pub const COL_EXPERIENCE: &str = "Experience";
pub const COL_BUDGET: &str = "Budget";
pub const COL_CURRENCY: &str = "Currency";
pub const COL_TYPE: &str = "Type";
pub const COL_DATE_POSTED: &str = "Date Posted";
pub const COL_CLIENT_REGISTRATION: &str = "Client Registration Date";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_TITLE,
    COL_CATEGORY,
    COL_SUB_CATEGORY,
    COL_COUNTRY,
    COL_EXPERIENCE,
    COL_BUDGET,
    COL_CURRENCY,
    COL_TYPE,
    COL_DATE_POSTED,
];

// Property names for geography features (different distributions of the
// countries dataset use different keys)
pub const COUNTRY_NAME_PROPERTIES: &[&str] = &["ADMIN", "name", "NAME"];
pub const ISO3_PROPERTIES: &[&str] = &["ISO_A3", "ISO3166-1-Alpha-3", "ADM0_A3"];

/// Placeholder code used by Natural Earth for features without an ISO code
pub const MISSING_ISO3: &str = "-99";

/// Naming mismatches between the postings and the geography source
pub const COUNTRY_OVERRIDES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("Russian Federation", "RUS"),
    ("Viet Nam", "VNM"),
    ("Serbia", "SRB"),
    ("Taiwan, Province of China", "TWN"),
    ("Moldova, Republic of", "MDA"),
    ("North Macedonia", "MKD"),
    ("Hong Kong", "HKG"),
];

/// Timestamp layouts accepted for "Date Posted"
pub const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];
