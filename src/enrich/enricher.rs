//! Derivation of enriched fields from raw postings.

use super::calendar::{Month, Weekday};
use super::record::EnrichedRecord;
use crate::context::PipelineContext;
use crate::loader::RawRecord;
use crate::utils::config::{COL_DATE_POSTED, TIMESTAMP_FORMATS};
use crate::utils::error::EnrichError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use log::{debug, info};

/// Enrich a single record
///
/// **Public** - pure function of the record and the context
///
/// # Errors
/// * `EnrichError::UnknownCountry` - client country has no ISO code
/// * `EnrichError::MalformedRecord` - "Date Posted" cannot be parsed
/// * `EnrichError::UnsupportedCurrency` - no rate for the record's currency
pub fn enrich(raw: &RawRecord, context: &PipelineContext) -> Result<EnrichedRecord, EnrichError> {
    let iso_code = context
        .reference()
        .resolve(&raw.client_country)
        .map_err(|_| EnrichError::UnknownCountry {
            row: raw.row,
            country: raw.client_country.clone(),
        })?
        .to_string();

    let experience = normalize_experience(&raw.experience).to_string();

    let posted_at = parse_posted_at(raw)?;

    let budget_reference = context
        .rates()
        .convert(raw.budget, &raw.currency)
        .ok_or_else(|| EnrichError::UnsupportedCurrency {
            row: raw.row,
            currency: raw.currency.clone(),
        })?;

    let month = Month::from_number(posted_at.month()).ok_or_else(|| EnrichError::MalformedRecord {
        row: raw.row,
        field: COL_DATE_POSTED.to_string(),
        value: raw.date_posted.clone(),
        reason: "month out of range".to_string(),
    })?;

    Ok(EnrichedRecord {
        raw: raw.clone(),
        iso_code,
        experience,
        posted_at,
        date: posted_at.date(),
        day: Weekday::from(posted_at.weekday()),
        hour: posted_at.hour(),
        month,
        budget_reference,
    })
}

/// Enrich every record, aborting on the first failure
///
/// **Public** - partial results are never returned
pub fn enrich_all(
    raws: &[RawRecord],
    context: &PipelineContext,
) -> Result<Vec<EnrichedRecord>, EnrichError> {
    debug!("Enriching {} records", raws.len());

    let enriched = raws
        .iter()
        .map(|raw| enrich(raw, context))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Enriched {} records", enriched.len());

    Ok(enriched)
}

/// Calendar dates of every posting, in input order
///
/// Used to pick the default date range before rates are known.
pub fn posted_dates(raws: &[RawRecord]) -> Result<Vec<NaiveDate>, EnrichError> {
    raws.iter()
        .map(|raw| parse_posted_at(raw).map(|ts| ts.date()))
        .collect()
}

/// Strip the parenthetical qualifier from an experience label
///
/// Rule: keep everything before the first `(`, then trim trailing whitespace.
/// "Intermediate (2-5 yrs)" becomes "Intermediate"; labels without `(` only
/// lose trailing whitespace.
pub fn normalize_experience(experience: &str) -> &str {
    let head = match experience.find('(') {
        Some(pos) => &experience[..pos],
        None => experience,
    };
    head.trim_end()
}

/// Parse a "Date Posted" cell into a wall-clock timestamp
///
/// Offsets in RFC 3339 input are dropped rather than applied, so every record
/// keeps the time as written. Date-only values map to midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.naive_local());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parse_posted_at(raw: &RawRecord) -> Result<NaiveDateTime, EnrichError> {
    parse_timestamp(&raw.date_posted).ok_or_else(|| EnrichError::MalformedRecord {
        row: raw.row,
        field: COL_DATE_POSTED.to_string(),
        value: raw.date_posted.clone(),
        reason: "unrecognized timestamp format".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::ConversionRateSet;
    use crate::loader::ProjectType;
    use crate::reference::ReferenceTable;
    use pretty_assertions::assert_eq;

    fn context() -> PipelineContext {
        let reference = ReferenceTable::from_pairs([("United Kingdom", "GBR"), ("India", "IND")]);
        let rates = ConversionRateSet::new(
            "USD",
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            [("GBP".to_string(), 1.2)],
        );
        PipelineContext::new(reference, rates)
    }

    fn raw(country: &str, currency: &str, date_posted: &str) -> RawRecord {
        RawRecord {
            row: 7,
            title: "Landing page".to_string(),
            category: "Development".to_string(),
            sub_category: "Web".to_string(),
            client_country: country.to_string(),
            experience: "Intermediate (2-5 yrs)".to_string(),
            budget: 500.0,
            currency: currency.to_string(),
            project_type: ProjectType::FixedPrice,
            date_posted: date_posted.to_string(),
            client_registration_date: None,
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_normalize_experience_fixture() {
        let cases = [
            ("Intermediate (2-5 yrs)", "Intermediate"),
            ("Entry (0-2 yrs)", "Entry"),
            ("Expert(5+ yrs)", "Expert"),
            ("Expert", "Expert"),
            ("Expert   ", "Expert"),
            ("(unspecified)", ""),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_experience(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_enrich_gbp_scenario() {
        let record = enrich(&raw("United Kingdom", "GBP", "2023-02-01T10:00:00"), &context()).unwrap();

        assert!((record.budget_reference - 600.0).abs() < 1e-9);
        assert_eq!(record.day, Weekday::Wednesday);
        assert_eq!(record.hour, 10);
        assert_eq!(record.month, Month::February);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(record.iso_code, "GBR");
        assert_eq!(record.experience, "Intermediate");
        // raw fields untouched
        assert_eq!(record.raw.experience, "Intermediate (2-5 yrs)");
        assert_eq!(record.raw.budget, 500.0);
    }

    #[test]
    fn test_reference_currency_converts_at_one() {
        let record = enrich(&raw("India", "USD", "2023-02-01 10:00:00"), &context()).unwrap();
        assert_eq!(record.budget_reference, 500.0);
    }

    #[test]
    fn test_unknown_country_is_surfaced() {
        match enrich(&raw("Atlantis", "USD", "2023-02-01 10:00:00"), &context()) {
            Err(EnrichError::UnknownCountry { row, country }) => {
                assert_eq!(row, 7);
                assert_eq!(country, "Atlantis");
            }
            other => panic!("expected UnknownCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_currency() {
        match enrich(&raw("India", "JPY", "2023-02-01 10:00:00"), &context()) {
            Err(EnrichError::UnsupportedCurrency { row, currency }) => {
                assert_eq!(row, 7);
                assert_eq!(currency, "JPY");
            }
            other => panic!("expected UnsupportedCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_date() {
        assert!(matches!(
            enrich(&raw("India", "USD", "yesterday"), &context()),
            Err(EnrichError::MalformedRecord { row: 7, .. })
        ));
    }

    #[test]
    fn test_enrich_all_aborts_on_first_error() {
        let records = vec![
            raw("India", "USD", "2023-02-01 10:00:00"),
            raw("Atlantis", "USD", "2023-02-01 10:00:00"),
        ];
        assert!(enrich_all(&records, &context()).is_err());
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let input = raw("United Kingdom", "GBP", "2023-02-01T10:00:00");
        let ctx = context();
        let first = enrich(&input, &ctx).unwrap();
        let second = enrich(&input, &ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        assert_eq!(parse_timestamp("2023-02-01T10:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2023-02-01 10:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2023-02-01 10:00"), Some(expected));
        assert_eq!(parse_timestamp("02/01/2023 10:00"), Some(expected));
        assert_eq!(parse_timestamp("2023-02-01T10:00:00+05:30"), Some(expected));
        assert_eq!(
            parse_timestamp("2023-02-01"),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn test_calendar_date_has_no_timezone_drift() {
        // late-evening timestamps with offsets keep their written date
        let record = enrich(&raw("India", "USD", "2023-03-31T23:30:00-08:00"), &context()).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 3, 31).unwrap());
        assert_eq!(record.hour, 23);
        assert_eq!(record.date, record.posted_at.date());
    }

    #[test]
    fn test_posted_dates() {
        let records = vec![
            raw("India", "USD", "2023-02-03 10:00:00"),
            raw("India", "USD", "2023-02-01 09:00:00"),
        ];
        let dates = posted_dates(&records).unwrap();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2023, 2, 3).unwrap(),
                NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
            ]
        );
    }
}
