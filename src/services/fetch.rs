// src/services/fetch.rs

//! HTTP fetch service.
//!
//! One GET per call, shared client, typed failures. Status >= 400 is
//! surfaced as an item-level error without retry; the per-request timeout
//! aborts the in-flight request.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;

/// Service issuing single GET requests with configured headers and timeout.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher from scraper settings.
    pub fn new(config: &ScraperConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.accept) {
            headers.insert(ACCEPT, value);
        }
        if let Ok(value) = HeaderValue::from_str(&config.accept_language) {
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetch a URL and return the response body decoded as text.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(e, url))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(AppError::http_status(status.as_u16(), url));
        }

        response.text().await.map_err(|e| classify(e, url))
    }
}

/// Map a transport error onto the application taxonomy.
fn classify(error: reqwest::Error, url: &str) -> AppError {
    if error.is_timeout() {
        AppError::timeout(url)
    } else {
        AppError::network(url, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_from_default_config() {
        let config = ScraperConfig::default();
        let _ = Fetcher::new(&config);
    }

    #[test]
    fn test_fetcher_tolerates_odd_header_values() {
        let config = ScraperConfig {
            accept: "bad\nvalue".to_string(),
            ..ScraperConfig::default()
        };
        let _ = Fetcher::new(&config);
    }
}
