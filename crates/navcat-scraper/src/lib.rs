//! Product page specification scraping.
//!
//! Fetches product pages from the source shop and extracts key/value
//! specification fields through a cascade of five strategies, then files
//! them into the eight fixed categories of
//! [`navcat_core::SpecGroups`]. Scraping is best-effort by design: pages
//! that cannot be fetched or carry no recognizable fields produce no
//! specifications rather than errors.

pub mod cascade;
pub mod categorize;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod scrape;

mod html;
mod labels;
mod retry;

pub use cascade::SpecExtractor;
pub use categorize::categorize;
pub use client::PageClient;
pub use error::ScrapeError;
pub use fetcher::PageFetcher;
pub use scrape::{ScrapedSpecs, SpecsScraper};
