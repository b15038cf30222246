//! Upstream quote API client.
//!
//! Fetches the raw quote array from the upstream API (ZenQuotes by default).
//! The upstream is untrusted and unstable: a non-2xx status, unreachable
//! host, or a body that is not an array of `{q, a}` objects all surface as
//! errors for the aggregator to degrade on.

use serde::Deserialize;
use tracing::debug;

use crate::error::{QuoteError, QuoteResult};

/// Default upstream quote endpoint
pub const DEFAULT_QUOTES_URL: &str = "https://zenquotes.io/api/quotes";

/// A quote as delivered by the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuote {
    /// Quote text
    #[serde(rename = "q")]
    pub text: String,
    /// Attributed author
    #[serde(rename = "a")]
    pub author: String,
}

/// HTTP client for the upstream quote API
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: reqwest::Client,
    url: String,
}

impl QuoteFetcher {
    /// Create a fetcher against the default upstream endpoint
    pub fn new() -> Self {
        Self::with_url(DEFAULT_QUOTES_URL)
    }

    /// Create a fetcher against a custom endpoint (tests, alternate upstreams)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// The endpoint this fetcher targets
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the upstream quote array.
    ///
    /// Returns `QuoteError::Fetch` for transport/status failures and
    /// `QuoteError::MalformedResponse` when the body is not the expected
    /// JSON array shape.
    pub async fn fetch(&self) -> QuoteResult<Vec<RawQuote>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let quotes: Vec<RawQuote> = serde_json::from_str(&body)
            .map_err(|e| QuoteError::MalformedResponse(e.to_string()))?;

        debug!("Fetched {} quotes from {}", quotes.len(), self.url);
        Ok(quotes)
    }
}

impl Default for QuoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_quote_parses_upstream_shape() {
        let body = r#"[{"q": "Be like a tree.", "a": "Rumi", "h": "<p>...</p>"}]"#;
        let quotes: Vec<RawQuote> = serde_json::from_str(body).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "Be like a tree.");
        assert_eq!(quotes[0].author, "Rumi");
    }

    #[test]
    fn test_non_array_body_is_malformed() {
        let body = r#"{"error": "rate limited"}"#;
        let result: Result<Vec<RawQuote>, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_fetch_error() {
        let fetcher = QuoteFetcher::with_url("http://127.0.0.1:1/quotes");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, QuoteError::Fetch(_)));
    }
}
