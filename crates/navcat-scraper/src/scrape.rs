//! Best-effort specification scraping for a single product page.

use navcat_core::{SpecField, SpecGroups};

use crate::cascade::SpecExtractor;
use crate::categorize::categorize;
use crate::fetcher::PageFetcher;

/// The outcome of scraping one product page: the raw key/value pairs in
/// extraction order, and the same fields filed into categories.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedSpecs {
    pub raw: Vec<SpecField>,
    pub categorized: SpecGroups,
}

/// Fetches a product page and runs the extraction cascade over it.
///
/// Scraping is best-effort: a fetch failure or a page with no recognizable
/// fields yields `None` and a log line, never an error. Products without
/// specifications are still worth syncing.
pub struct SpecsScraper<F> {
    fetcher: F,
    extractor: SpecExtractor,
}

impl<F: PageFetcher> SpecsScraper<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            extractor: SpecExtractor::new(),
        }
    }

    #[must_use]
    pub fn with_max_line_key_len(fetcher: F, max_line_key_len: usize) -> Self {
        Self {
            fetcher,
            extractor: SpecExtractor::with_max_line_key_len(max_line_key_len),
        }
    }

    /// Scrapes specifications from `url`, returning `None` when the page
    /// cannot be fetched or carries no recognizable fields.
    pub async fn scrape(&self, url: &str) -> Option<ScrapedSpecs> {
        if url.trim().is_empty() {
            tracing::debug!("no product URL, skipping specification scrape");
            return None;
        }

        let html = match self.fetcher.get(url).await {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(url, error = %err, "product page fetch failed, continuing without specifications");
                return None;
            }
        };

        let raw = self.extractor.extract(&html);
        if raw.is_empty() {
            tracing::debug!(url, "no specification fields found on page");
            return None;
        }

        let categorized = categorize(&raw);
        tracing::debug!(url, fields = raw.len(), "scraped specifications");
        Some(ScrapedSpecs { raw, categorized })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use navcat_core::SpecCategory;

    struct StubFetcher {
        body: Option<&'static str>,
    }

    impl PageFetcher for StubFetcher {
        async fn get(&self, url: &str) -> Result<String, ScrapeError> {
            self.body.map(str::to_owned).ok_or(ScrapeError::NotFound {
                url: url.to_owned(),
            })
        }
    }

    #[tokio::test]
    async fn scrapes_and_categorizes_a_details_page() {
        let scraper = SpecsScraper::new(StubFetcher {
            body: Some(
                r#"<div class="product-details">
                    <div>SKU</div><div>PTN-S1-2K</div>
                    <div>Memorie RAM</div><div>4GB</div>
                </div>"#,
            ),
        });

        let specs = scraper
            .scrape("https://shop.example.com/produs/x")
            .await
            .expect("specs extracted");
        assert_eq!(specs.raw.len(), 2);
        assert_eq!(
            specs.categorized.get(SpecCategory::General).unwrap()[0].value,
            "PTN-S1-2K"
        );
        assert_eq!(
            specs.categorized.get(SpecCategory::Hardware).unwrap()[0].value,
            "4GB"
        );
    }

    #[tokio::test]
    async fn fetch_failure_yields_none() {
        let scraper = SpecsScraper::new(StubFetcher { body: None });
        assert!(scraper
            .scrape("https://shop.example.com/produs/x")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn page_without_fields_yields_none() {
        let scraper = SpecsScraper::new(StubFetcher {
            body: Some("<html><body><p>Despre noi</p></body></html>"),
        });
        assert!(scraper
            .scrape("https://shop.example.com/produs/x")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn empty_url_yields_none_without_fetching() {
        let scraper = SpecsScraper::new(StubFetcher { body: None });
        assert!(scraper.scrape("").await.is_none());
    }
}
