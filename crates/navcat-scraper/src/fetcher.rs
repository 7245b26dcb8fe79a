//! The page-fetching seam between the scraper and the network.

use crate::error::ScrapeError;

/// Fetches a product page body by URL.
///
/// [`crate::PageClient`] is the production implementation; tests substitute
/// in-memory stubs so extraction logic runs without a network.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Returns the page body for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] on network failure or a non-2xx status.
    async fn get(&self, url: &str) -> Result<String, ScrapeError>;
}
