use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};

use crate::error::SummarizeError;

/// Desktop browser user agent; many news sites reject obvious bots.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Parses and validates a user-supplied article URL.
///
/// Only absolute `http` and `https` URLs are accepted.
pub fn parse_url(raw: &str) -> Result<Url, SummarizeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SummarizeError::MissingUrl);
    }

    let url = Url::parse(raw).map_err(|e| {
        tracing::warn!("rejected URL {:?}: {}", raw, e);
        SummarizeError::InvalidUrl
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => {
            tracing::warn!("rejected URL {:?}: unsupported scheme '{}'", raw, other);
            Err(SummarizeError::InvalidUrl)
        }
    }
}

/// Downloads article pages. Holds one connection pool for its lifetime.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher whose requests give up after `timeout_secs`.
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Fetcher { client })
    }

    /// Fetches the page at `url` and returns its body as text.
    ///
    /// Any non-2xx status is reported as [`SummarizeError::Fetch`].
    pub async fn fetch_html(&self, url: &Url) -> Result<String, SummarizeError> {
        tracing::info!("fetching {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("fetch of {} failed with status {}", url, status);
            return Err(SummarizeError::Fetch);
        }

        let html = response.text().await?;
        tracing::debug!("fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
