//! HTTP client for a Frankfurter-compatible exchange rate API.

use super::source::RateSource;
use super::types::{ErrorResponse, RatesResponse};
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::RateError;
use chrono::NaiveDate;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Rate source backed by `GET {base_url}/{date}?from=..&to=..`
pub struct HttpRateSource {
    client: Client,
    base_url: String,
}

impl HttpRateSource {
    /// Create a new client
    pub fn new(base_url: impl Into<String>) -> Result<Self, RateError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(RateError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL queried for a given date
    pub fn endpoint(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            date.format("%Y-%m-%d")
        )
    }
}

impl RateSource for HttpRateSource {
    fn rate(&self, from: &str, to: &str, date: NaiveDate) -> Result<f64, RateError> {
        let url = self.endpoint(date);

        info!("Fetching {}->{} rate for {}", from, to, date);
        debug!("Rate request: {} (from={}, to={})", url, from, to);

        let response = self
            .client
            .get(&url)
            .query(&[("from", from), ("to", to)])
            .send()
            .map_err(RateError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(map_status_error(status, &body, from, to, date));
        }

        let body: RatesResponse = response.json().map_err(RateError::RequestFailed)?;

        debug!("Rate response: base {} published {}", body.base, body.date);

        if !body.base.eq_ignore_ascii_case(from) {
            return Err(RateError::InvalidResponse(format!(
                "asked for base {} but got {}",
                from, body.base
            )));
        }

        extract_rate(&body, from, to, date)
    }
}

/// Pick the quote currency out of a response
fn extract_rate(body: &RatesResponse, from: &str, to: &str, date: NaiveDate) -> Result<f64, RateError> {
    let rate = body
        .rates
        .get(to)
        .copied()
        .ok_or_else(|| RateError::RateUnavailable {
            from: from.to_string(),
            to: to.to_string(),
            date,
            reason: "quote currency missing from response".to_string(),
        })?;

    // Rates are quoted per `amount` units of the base currency
    let amount = body.amount.unwrap_or(1.0);
    if amount <= 0.0 {
        return Err(RateError::InvalidResponse(format!("non-positive amount {}", amount)));
    }

    Ok(rate / amount)
}

/// Map non-success HTTP statuses to our error type
fn map_status_error(status: StatusCode, body: &str, from: &str, to: &str, date: NaiveDate) -> RateError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => RateError::RateUnavailable {
            from: from.to_string(),
            to: to.to_string(),
            date,
            reason: message,
        },
        _ => RateError::InvalidResponse(format!("HTTP {}: {}", status, message)),
    }
}
