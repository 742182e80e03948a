//! Exchange rate lookup
//!
//! Thin client for the exchangerate-api.com v4 endpoint. Fetches the
//! latest rate table for a base currency and looks up a target code.
//! Native only; the wasm build has no HTTP client.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

const API_URL: &str = "https://api.exchangerate-api.com/v4/latest";

#[derive(Debug)]
pub enum RateError {
    NetworkError(String),
    BadStatus(u16),
    ParseError(String),
    UnknownCurrency(String),
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RateError::BadStatus(code) => write!(f, "HTTP {}", code),
            RateError::ParseError(msg) => write!(f, "Failed to parse response: {}", msg),
            RateError::UnknownCurrency(code) => write!(f, "Unknown currency: {}", code),
        }
    }
}

impl std::error::Error for RateError {}

/// One day's rates for a base currency, as the API returns them.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    pub base: String,
    #[serde(default)]
    pub date: String,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    /// Rate for one unit of the base in `code`. Case-insensitive.
    pub fn rate_for(&self, code: &str) -> Result<f64, RateError> {
        let code = code.to_uppercase();
        self.rates
            .get(&code)
            .copied()
            .ok_or(RateError::UnknownCurrency(code))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn convert_error(e: ureq::Error) -> RateError {
    match e {
        ureq::Error::Status(code, _) => RateError::BadStatus(code),
        other => RateError::NetworkError(other.to_string()),
    }
}

/// Fetch the latest rate table for `base` (e.g. "EUR").
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_rates(base: &str) -> Result<RateTable, RateError> {
    let url = format!("{}/{}", API_URL, base.to_uppercase());
    let response = ureq::get(&url).call().map_err(convert_error)?;
    response
        .into_json::<RateTable>()
        .map_err(|e| RateError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "base": "EUR",
        "date": "2026-08-28",
        "rates": {"EUR": 1.0, "USD": 1.09, "GBP": 0.85}
    }"#;

    #[test]
    fn test_parse_rate_table() {
        let table: RateTable = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(table.base, "EUR");
        assert_eq!(table.rates.len(), 3);
    }

    #[test]
    fn test_rate_lookup_is_case_insensitive() {
        let table: RateTable = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(table.rate_for("usd").unwrap(), 1.09);
        assert_eq!(table.rate_for("USD").unwrap(), 1.09);
    }

    #[test]
    fn test_unknown_currency_names_the_code() {
        let table: RateTable = serde_json::from_str(SAMPLE).unwrap();
        let err = table.rate_for("xyz").unwrap_err();
        assert!(matches!(err, RateError::UnknownCurrency(ref c) if c == "XYZ"));
    }

    #[test]
    fn test_missing_date_defaults_empty() {
        let table: RateTable =
            serde_json::from_str(r#"{"base": "HRK", "rates": {"EUR": 0.1327}}"#).unwrap();
        assert_eq!(table.date, "");
        assert_eq!(table.rate_for("EUR").unwrap(), 0.1327);
    }
}
