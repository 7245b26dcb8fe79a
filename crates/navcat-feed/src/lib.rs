//! Merchant feed ingestion.
//!
//! Parses the Google Shopping XML feed, normalizes each entry into a
//! [`navcat_core::CanonicalProduct`] (fitment key, structured description,
//! scraped specifications), and reconciles the result against a
//! [`CatalogStore`]. One feed entry failing never aborts the run; the
//! sync report counts it and the loop moves on.

pub mod error;
pub mod feed;
pub mod ingest;
pub mod store;

pub use error::SyncError;
pub use feed::{parse_feed, parse_price, FeedEntry};
pub use ingest::{FeedIngestor, SyncReport};
pub use store::{CatalogStore, MemoryStore, StoreError};
