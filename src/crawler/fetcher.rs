//! HTTP fetcher implementation
//!
//! One GET per call with a fixed browser-identifying User-Agent. There is
//! deliberately no retry logic: a failed fetch is classified into a typed
//! [`FetchError`] and the caller decides how far the damage spreads.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the shared HTTP client
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header sent on every request
/// * `timeout` - Per-request timeout
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, returning the raw body text
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Non-success status, timeout, or network failure,
///   carrying the URL and cause
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
            Duration::from_secs(30),
        );
        assert!(client.is_ok());
    }

    // Fetch behavior against live endpoints is covered by the wiremock
    // integration tests in tests/crawl_tests.rs
}
