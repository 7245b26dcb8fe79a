//! reqwest-backed product page fetcher.

use std::time::Duration;

use navcat_core::AppConfig;
use reqwest::Client;

use crate::error::ScrapeError;
use crate::fetcher::PageFetcher;
use crate::retry::retry_with_backoff;

/// HTTP client for fetching product pages from the source shop.
///
/// Sends browser-like `Accept` and `Accept-Language: ro-RO` headers so the
/// shop serves the same Romanian-language markup a visitor would see.
/// Transient failures (network errors, 5xx) are retried with a fixed delay;
/// 404 and other 4xx statuses surface immediately as typed errors.
#[derive(Clone)]
pub struct PageClient {
    client: Client,
    /// Number of additional attempts after the first failure.
    max_retries: u32,
    /// Fixed pause between attempts, in seconds.
    retry_delay_secs: u64,
}

impl PageClient {
    /// Creates a `PageClient` with configured timeout, `User-Agent`, and
    /// retry policy. Set `max_retries` to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        retry_delay_secs: u64,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            retry_delay_secs,
        })
    }

    /// Client for product page fetches, using the page timeout from config.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn for_product_pages(config: &AppConfig) -> Result<Self, ScrapeError> {
        Self::new(
            config.page_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_delay_secs,
        )
    }

    /// Client for fetching the feed document itself; the feed is a large
    /// XML payload and carries its own, longer timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn for_feed(config: &AppConfig) -> Result<Self, ScrapeError> {
        Self::new(
            config.feed_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_delay_secs,
        )
    }
}

impl PageFetcher for PageClient {
    async fn get(&self, url: &str) -> Result<String, ScrapeError> {
        retry_with_backoff(self.max_retries, self.retry_delay_secs, || {
            let url = url.to_owned();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(
                        reqwest::header::ACCEPT,
                        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
                    )
                    .header(reqwest::header::ACCEPT_LANGUAGE, "ro-RO,ro;q=0.9,en;q=0.8")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ScrapeError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(ScrapeError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
