//! The feed-to-catalog sync pipeline.

use std::time::Duration;

use chrono::Utc;
use navcat_core::{AppConfig, CanonicalProduct, ProductImage, SpecCategory, SpecField};
use navcat_extract::{BrandModelExtractor, DescriptionSegmenter};
use navcat_scraper::{PageClient, PageFetcher, ScrapeError, SpecsScraper};

use crate::error::SyncError;
use crate::feed::{
    clean_description, determine_category, generate_sku, generate_slug, parse_feed, FeedEntry,
};
use crate::store::{CatalogStore, StoreError};

/// Stock level assigned to entries the feed marks as in stock; the feed
/// carries no quantities.
const IN_STOCK_LEVEL: u32 = 50;

/// Aggregate counters for one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Entries parsed from the feed.
    pub total: usize,
    /// Entries reconciled and written to the store.
    pub synced: usize,
    /// Entries that failed; the run continues past them.
    pub errors: usize,
}

/// Drives one full sync: fetch the feed, normalize each entry into a
/// [`CanonicalProduct`], enrich it with scraped specifications, and
/// reconcile it against the catalog store.
///
/// Re-running against unchanged inputs converges: no duplicates, identical
/// values, original creation timestamps preserved.
pub struct FeedIngestor<F, S> {
    config: AppConfig,
    fetcher: F,
    scraper: SpecsScraper<F>,
    store: S,
    extractor: BrandModelExtractor,
    segmenter: DescriptionSegmenter,
}

impl<F, S> FeedIngestor<F, S>
where
    F: PageFetcher + Clone,
    S: CatalogStore,
{
    #[must_use]
    pub fn new(config: AppConfig, fetcher: F, store: S) -> Self {
        let pages = fetcher.clone();
        Self::with_fetchers(config, fetcher, pages, store)
    }

    /// Builds an ingestor with separate fetchers for the feed document and
    /// for product pages, so each carries its own timeout policy.
    #[must_use]
    pub fn with_fetchers(config: AppConfig, feed_fetcher: F, page_fetcher: F, store: S) -> Self {
        let scraper =
            SpecsScraper::with_max_line_key_len(page_fetcher, config.max_line_key_len);
        let segmenter =
            DescriptionSegmenter::with_limits(config.min_sentence_len, config.min_point_len);
        Self {
            config,
            fetcher: feed_fetcher,
            scraper,
            store,
            extractor: BrandModelExtractor::new(),
            segmenter,
        }
    }

    /// Runs one sync pass over the whole feed.
    ///
    /// Per-entry failures are logged and counted, never fatal; the entry
    /// loop always runs to the end.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] only when the feed itself cannot be fetched
    /// or parsed.
    pub async fn sync(&self) -> Result<SyncReport, SyncError> {
        tracing::info!(feed_url = %self.config.feed_url, "starting product sync from feed");

        let xml = self.fetcher.get(&self.config.feed_url).await?;
        let entries = parse_feed(&xml)?;
        let total = entries.len();
        tracing::info!(total, "parsed feed entries");

        let mut synced = 0usize;
        let mut errors = 0usize;
        for (idx, entry) in entries.iter().enumerate() {
            match self.sync_entry(entry).await {
                Ok(()) => synced += 1,
                Err(err) => {
                    tracing::warn!(
                        external_id = %entry.external_id,
                        error = %err,
                        "failed to sync feed entry"
                    );
                    errors += 1;
                }
            }
            // Politeness pause between product page fetches.
            if idx + 1 < total && self.config.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.inter_request_delay_ms))
                    .await;
            }
        }

        tracing::info!(total, synced, errors, "product sync completed");
        Ok(SyncReport {
            total,
            synced,
            errors,
        })
    }

    async fn sync_entry(&self, entry: &FeedEntry) -> Result<(), StoreError> {
        let mut candidate = self.build_candidate(entry);

        if let Some(specs) = self.scraper.scrape(&entry.link).await {
            candidate.specifications = specs.categorized;
            // The details section does not always repeat the SKU.
            if !candidate.specifications.contains_key("SKU") {
                candidate.specifications.insert(
                    SpecCategory::General,
                    "SKU",
                    candidate.sku.clone(),
                );
            }
        }

        self.reconcile_and_upsert(candidate).await
    }

    /// Builds the store candidate from feed fields alone; scraped
    /// specifications are attached afterwards.
    fn build_candidate(&self, entry: &FeedEntry) -> CanonicalProduct {
        let brand_model = self.extractor.extract(&entry.title);
        if brand_model.is_none() {
            tracing::warn!(title = %entry.title, "no known vehicle brand in title");
        }

        let sku = entry
            .mpn
            .clone()
            .unwrap_or_else(|| generate_sku(&entry.external_id, entry.brand.as_deref()));

        let on_sale = matches!((entry.sale_price, entry.price), (Some(sale), Some(full)) if sale < full);
        let price = entry.sale_price.or(entry.price);
        let original_price = entry.sale_price.and(entry.price);
        let discount = discount_percent(entry.price, entry.sale_price);

        let stock = if entry.availability.as_deref() == Some("in_stock") {
            IN_STOCK_LEVEL
        } else {
            0
        };

        let now = Utc::now();
        CanonicalProduct {
            external_id: entry.external_id.clone(),
            slug: generate_slug(&entry.title),
            name: entry.title.clone(),
            description: clean_description(&entry.description),
            sku,
            price,
            original_price,
            discount,
            on_sale,
            stock,
            category: determine_category(&entry.title).to_string(),
            brand: entry.brand.clone(),
            condition: entry.condition.clone(),
            availability: entry.availability.clone(),
            images: build_images(entry),
            base_specs: build_base_specs(entry),
            specifications: navcat_core::SpecGroups::new(),
            structured_description: self.segmenter.segment(&entry.description),
            brand_model,
            external_link: entry.link.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Matches the candidate against the store by external id, then slug,
    /// then exact name; a match keeps its original creation timestamp and
    /// is otherwise fully overwritten.
    async fn reconcile_and_upsert(&self, candidate: CanonicalProduct) -> Result<(), StoreError> {
        let existing = match self.store.find_by_external_id(&candidate.external_id).await? {
            Some(product) => Some(product),
            None => match self.store.find_by_slug(&candidate.slug).await? {
                Some(product) => Some(product),
                None => self.store.find_by_name(&candidate.name).await?,
            },
        };

        let mut product = candidate;
        match existing {
            Some(previous) => {
                product.created_at = previous.created_at;
                tracing::debug!(external_id = %product.external_id, "updating existing product");
            }
            None => {
                tracing::debug!(external_id = %product.external_id, "creating new product");
            }
        }

        self.store.upsert(product).await
    }
}

impl<S: CatalogStore> FeedIngestor<PageClient, S> {
    /// Builds the production ingestor from configuration: an HTTP client
    /// with the feed timeout for the feed document and one with the page
    /// timeout for product pages, both carrying the configured user agent
    /// and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] if either HTTP client cannot be constructed.
    pub fn from_config(config: AppConfig, store: S) -> Result<Self, ScrapeError> {
        let feed_client = PageClient::for_feed(&config)?;
        let page_client = PageClient::for_product_pages(&config)?;
        Ok(Self::with_fetchers(config, feed_client, page_client, store))
    }
}

fn discount_percent(price: Option<f64>, sale_price: Option<f64>) -> u8 {
    let (Some(full), Some(sale)) = (price, sale_price) else {
        return 0;
    };
    if full <= 0.0 || sale >= full {
        return 0;
    }
    let percent = ((full - sale) / full * 100.0).round();
    if percent < 0.0 {
        0
    } else if percent > f64::from(u8::MAX) {
        u8::MAX
    } else {
        // Bounds checked just above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            percent as u8
        }
    }
}

fn build_images(entry: &FeedEntry) -> Vec<ProductImage> {
    let mut images = Vec::new();
    if let Some(url) = &entry.image_link {
        images.push(ProductImage {
            url: url.clone(),
            alt: entry.title.clone(),
            is_primary: true,
        });
    }
    for (idx, url) in entry.additional_image_links.iter().enumerate() {
        images.push(ProductImage {
            url: url.clone(),
            alt: format!("{} - Image {}", entry.title, idx + 2),
            is_primary: false,
        });
    }
    images
}

/// Flat feed-level specifications. Condition defaults to `new`; absent
/// fields are omitted entirely.
fn build_base_specs(entry: &FeedEntry) -> Vec<SpecField> {
    let mut specs = Vec::new();
    if let Some(gtin) = &entry.gtin {
        specs.push(SpecField::new("GTIN", gtin.clone()));
    }
    if let Some(mpn) = &entry.mpn {
        specs.push(SpecField::new("MPN", mpn.clone()));
    }
    specs.push(SpecField::new(
        "Condition",
        entry.condition.clone().unwrap_or_else(|| "new".to_string()),
    ));
    if let Some(product_type) = &entry.product_type {
        specs.push(SpecField::new("Product Type", product_type.clone()));
    }
    specs
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
