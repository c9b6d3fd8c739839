mod common;

use chrono::NaiveDate;
use common::{context, Posting};
use freelance_insights::enrich::{enrich, enrich_all, Month, Weekday};
use freelance_insights::utils::error::EnrichError;
use pretty_assertions::assert_eq;

#[test]
fn test_gbp_fixed_price_scenario() {
    let record = Posting::new(1, "Design")
        .budget(500.0, "GBP")
        .country("United Kingdom")
        .posted("2023-02-01T10:00:00")
        .build();

    assert_eq!(format!("{:.2}", record.budget_reference), "600.00");
    assert_eq!(record.day, Weekday::Wednesday);
    assert_eq!(record.hour, 10);
    assert_eq!(record.month, Month::February);
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    assert_eq!(record.iso_code, "GBR");
}

#[test]
fn test_russian_federation_resolves_via_override() {
    let record = Posting::new(1, "Design").country("Russian Federation").build();
    assert_eq!(record.iso_code, "RUS");
}

#[test]
fn test_enrichment_is_deterministic_across_runs() {
    let raws = vec![
        Posting::new(1, "Design").budget(500.0, "GBP").raw(),
        Posting::new(2, "Writing").budget(80.0, "EUR").posted("2023-05-07 17:45:00").raw(),
    ];

    let first = enrich_all(&raws, &context()).unwrap();
    let second = enrich_all(&raws, &context()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
    // raw inputs carried through untouched
    assert_eq!(first[1].raw, raws[1]);
}

#[test]
fn test_error_carries_record_context() {
    let raw = Posting::new(12, "Design").budget(10.0, "CHF").raw();

    let err = enrich(&raw, &context()).unwrap_err();

    assert!(matches!(err, EnrichError::UnsupportedCurrency { row: 12, .. }));
    assert_eq!(err.to_string(), "Row 12: no conversion rate for currency 'CHF'");
}
