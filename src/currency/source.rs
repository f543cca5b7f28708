use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config;

/// Errors from fetching the live exchange rate. All of these are absorbed
/// by the currency service: logged, never surfaced to callers.
#[derive(Debug, Error)]
pub enum RateSourceError {
    #[error("Could not reach exchange-rate source at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Exchange-rate source returned status {status}: {body}")]
    SourceStatus { status: u16, body: String },

    #[error("Response parsing failed: {0}")]
    ResponseParsing(String),

    #[error("Response carries no usable PKR rate")]
    MissingRate,
}

/// Source of the USD→PKR exchange rate.
///
/// Production uses [`HttpRateSource`]; tests substitute fakes so the
/// service's caching and fallback behavior can be exercised offline.
pub trait RateSource {
    fn fetch_usd_to_pkr(&self) -> Result<f64, RateSourceError>;
}

/// Response body of the exchange endpoint: `{"rates": {"PKR": 278.5, ...}}`.
#[derive(Deserialize)]
struct RatesResponse {
    rates: RatesTable,
}

#[derive(Deserialize)]
struct RatesTable {
    #[serde(rename = "PKR")]
    pkr: Option<f64>,
}

/// HTTP client for the third-party exchange-rate endpoint.
pub struct HttpRateSource {
    url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpRateSource {
    /// Create a source with a bounded request timeout.
    pub fn new(url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            url: url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default endpoint with a 10-second timeout.
    pub fn default_source() -> Self {
        Self::new(config::EXCHANGE_API_URL, 10)
    }
}

impl RateSource for HttpRateSource {
    fn fetch_usd_to_pkr(&self) -> Result<f64, RateSourceError> {
        let response = self.client.get(&self.url).send().map_err(|e| {
            if e.is_connect() {
                RateSourceError::Connection(self.url.clone())
            } else if e.is_timeout() {
                RateSourceError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                RateSourceError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RateSourceError::SourceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RatesResponse = response
            .json()
            .map_err(|e| RateSourceError::ResponseParsing(e.to_string()))?;

        match parsed.rates.pkr {
            Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
            _ => Err(RateSourceError::MissingRate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_shape_parses_pkr() {
        let body = r#"{"base":"USD","rates":{"EUR":0.91,"PKR":281.25}}"#;
        let parsed: RatesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.rates.pkr, Some(281.25));
    }

    #[test]
    fn missing_pkr_field_is_recognized() {
        let body = r#"{"base":"USD","rates":{"EUR":0.91}}"#;
        let parsed: RatesResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.rates.pkr.is_none());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let source = HttpRateSource::new("https://example.com/latest/USD/", 5);
        assert_eq!(source.url, "https://example.com/latest/USD");
    }
}
