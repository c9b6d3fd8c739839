//! Response types of the Frankfurter-compatible rate API.

use serde::Deserialize;
use std::collections::HashMap;

/// Body of `GET /{date}?from=XXX&to=YYY`
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub amount: Option<f64>,

    /// Base currency echoed back
    pub base: String,

    /// Date the rates were published for (may precede the requested date
    /// on weekends and holidays)
    pub date: String,

    /// Quote currency -> rate
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
