//! Conversion rate set for one pipeline run.

use super::source::RateSource;
use crate::utils::error::RateError;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One rate per currency into the reference currency, fixed for the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRateSet {
    /// Currency every amount is converted to
    pub reference_currency: String,

    /// Date the rates were quoted for
    pub reference_date: NaiveDate,

    /// Source currency -> rate into `reference_currency`
    pub rates: BTreeMap<String, f64>,
}

impl ConversionRateSet {
    pub fn new(
        reference_currency: impl Into<String>,
        reference_date: NaiveDate,
        rates: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        Self {
            reference_currency: reference_currency.into().to_ascii_uppercase(),
            reference_date,
            rates: rates
                .into_iter()
                .map(|(currency, rate)| (currency.to_ascii_uppercase(), rate))
                .collect(),
        }
    }

    /// Rate for a currency; the reference currency is always 1
    pub fn rate_for(&self, currency: &str) -> Option<f64> {
        if currency.eq_ignore_ascii_case(&self.reference_currency) {
            return Some(1.0);
        }
        self.rates.get(&currency.to_ascii_uppercase()).copied()
    }

    /// Convert an amount into the reference currency
    pub fn convert(&self, amount: f64, currency: &str) -> Option<f64> {
        self.rate_for(currency).map(|rate| amount * rate)
    }
}

/// Resolve the rate set for a run
///
/// **Public** - main entry point for currency normalization
///
/// Each non-reference currency in `currencies` is quoted exactly once, for
/// `reference_date`. Any failure aborts resolution; there is no fallback to
/// other dates.
///
/// # Errors
/// * `RateError::RateUnavailable` - naming the currency pair and date
pub fn resolve_rates<S: RateSource + ?Sized>(
    source: &S,
    reference_date: NaiveDate,
    currencies: &BTreeSet<String>,
    reference_currency: &str,
) -> Result<ConversionRateSet, RateError> {
    let reference_currency = reference_currency.to_ascii_uppercase();
    let mut rates = BTreeMap::new();

    for currency in currencies {
        let currency = currency.to_ascii_uppercase();
        if currency == reference_currency || rates.contains_key(&currency) {
            continue;
        }

        let rate = source
            .rate(&currency, &reference_currency, reference_date)
            .map_err(|e| into_unavailable(e, &currency, &reference_currency, reference_date))?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateError::RateUnavailable {
                from: currency,
                to: reference_currency,
                date: reference_date,
                reason: format!("source returned unusable rate {}", rate),
            });
        }

        debug!("{}->{} = {} on {}", currency, reference_currency, rate, reference_date);
        rates.insert(currency, rate);
    }

    info!(
        "Resolved {} conversion rate(s) into {} for {}",
        rates.len(),
        reference_currency,
        reference_date
    );

    Ok(ConversionRateSet {
        reference_currency,
        reference_date,
        rates,
    })
}

/// Make sure every failure names the pair and date it was for
fn into_unavailable(error: RateError, from: &str, to: &str, date: NaiveDate) -> RateError {
    match error {
        e @ RateError::RateUnavailable { .. } => e,
        other => RateError::RateUnavailable {
            from: from.to_string(),
            to: to.to_string(),
            date,
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::FixedRateSource;
    use std::cell::RefCell;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
    }

    fn currencies(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    /// Counts queries so tests can check each pair is asked for once
    struct CountingSource {
        calls: RefCell<Vec<(String, String, NaiveDate)>>,
        rate: f64,
    }

    impl RateSource for CountingSource {
        fn rate(&self, from: &str, to: &str, date: NaiveDate) -> Result<f64, RateError> {
            self.calls
                .borrow_mut()
                .push((from.to_string(), to.to_string(), date));
            Ok(self.rate)
        }
    }

    #[test]
    fn test_resolve_skips_reference_currency() {
        let source = CountingSource {
            calls: RefCell::new(Vec::new()),
            rate: 1.1,
        };

        let set = resolve_rates(&source, date(), &currencies(&["USD", "EUR", "GBP"]), "USD").unwrap();

        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, to, d)| to == "USD" && *d == date()));
        assert_eq!(set.rate_for("USD"), Some(1.0));
        assert_eq!(set.rate_for("EUR"), Some(1.1));
        assert_eq!(set.reference_date, date());
    }

    #[test]
    fn test_resolve_fails_when_any_rate_missing() {
        let source = FixedRateSource::new("USD").with_rate("GBP", 1.2);
        match resolve_rates(&source, date(), &currencies(&["GBP", "EUR"]), "USD") {
            Err(RateError::RateUnavailable { from, to, date: d, .. }) => {
                assert_eq!(from, "EUR");
                assert_eq!(to, "USD");
                assert_eq!(d, date());
            }
            other => panic!("expected RateUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_rejects_non_positive_rate() {
        let source = FixedRateSource::new("USD").with_rate("GBP", 0.0);
        assert!(resolve_rates(&source, date(), &currencies(&["GBP"]), "USD").is_err());
    }

    #[test]
    fn test_other_errors_are_wrapped_with_pair() {
        let wrapped = into_unavailable(
            RateError::InvalidResponse("HTTP 500".to_string()),
            "GBP",
            "USD",
            date(),
        );
        let message = wrapped.to_string();
        assert!(message.contains("GBP->USD"));
        assert!(message.contains("2023-02-01"));
    }

    #[test]
    fn test_convert() {
        let set = ConversionRateSet::new("usd", date(), [("gbp".to_string(), 1.2)]);
        assert_eq!(set.convert(10.0, "USD"), Some(10.0));
        assert!((set.convert(500.0, "GBP").unwrap() - 600.0).abs() < 1e-9);
        assert_eq!(set.convert(10.0, "JPY"), None);
    }
}
