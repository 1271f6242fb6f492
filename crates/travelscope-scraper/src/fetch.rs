//! Single-shot HTML page fetcher.

use std::time::Duration;

use reqwest::Client;

use crate::error::AdvisoryError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Result of one GET against a candidate URL.
///
/// Failures are values, not errors: the caller decides whether to move on to
/// the next candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Page { html: String },
    /// Non-2xx response (`status` set) or transport failure (`status` is `None`).
    Failed { status: Option<u16> },
}

/// HTTP client that sends a fixed browser-like identity with every request.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher with the given per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AdvisoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Issues one GET. Never retries and never returns an error.
    pub async fn fetch_page(&self, url: &str) -> FetchOutcome {
        let response = match self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_HTML)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::debug!(url, error = %err, "page fetch failed");
                return FetchOutcome::Failed { status: None };
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "page fetch returned non-success status");
            return FetchOutcome::Failed {
                status: Some(status.as_u16()),
            };
        }

        match response.text().await {
            Ok(html) => FetchOutcome::Page { html },
            Err(err) => {
                tracing::debug!(url, error = %err, "page body could not be read");
                FetchOutcome::Failed { status: None }
            }
        }
    }
}
