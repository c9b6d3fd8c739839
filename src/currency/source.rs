//! Rate source abstraction.

use crate::utils::error::RateError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Anything that can quote a single conversion rate for a date
pub trait RateSource {
    /// Rate converting one unit of `from` into `to` on `date`
    fn rate(&self, from: &str, to: &str, date: NaiveDate) -> Result<f64, RateError>;
}

/// In-memory rates into a single target currency
///
/// Used when rates are supplied on the command line and in tests. The same
/// rate is returned for every date.
#[derive(Debug, Clone, Default)]
pub struct FixedRateSource {
    target: String,
    rates: HashMap<String, f64>,
}

impl FixedRateSource {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into().to_ascii_uppercase(),
            rates: HashMap::new(),
        }
    }

    pub fn with_rate(mut self, from: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(from.into().to_ascii_uppercase(), rate);
        self
    }
}

impl RateSource for FixedRateSource {
    fn rate(&self, from: &str, to: &str, date: NaiveDate) -> Result<f64, RateError> {
        if !to.eq_ignore_ascii_case(&self.target) {
            return Err(RateError::RateUnavailable {
                from: from.to_string(),
                to: to.to_string(),
                date,
                reason: format!("fixed rates only quote into {}", self.target),
            });
        }

        self.rates
            .get(&from.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| RateError::RateUnavailable {
                from: from.to_string(),
                to: to.to_string(),
                date,
                reason: "no fixed rate configured".to_string(),
            })
    }
}
