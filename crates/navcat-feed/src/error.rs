//! Sync-aborting errors.
//!
//! Only failures that invalidate the whole run live here: the feed document
//! itself being unreachable or unparseable. Per-entry failures are counted
//! in the sync report instead.

use navcat_scraper::ScrapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The feed document could not be fetched, retries included.
    #[error("feed fetch failed: {0}")]
    Feed(#[from] ScrapeError),

    /// The feed document is not well-formed XML.
    #[error("feed XML malformed: {0}")]
    Xml(#[from] quick_xml::Error),
}
