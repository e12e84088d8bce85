use crate::types::{AggregatorError, FetchConfig, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Thin wrapper around a configured `reqwest::Client`. One fetch per call,
/// no retries: a failed source is simply skipped for this run.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let redirect_policy = if config.follow_redirects {
            reqwest::redirect::Policy::limited(config.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(redirect_policy)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page body as text. The URL is validated before the request
    /// goes out; non-2xx statuses are errors.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)?;
        debug!("Fetching page: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AggregatorError::General(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await?;
        info!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
