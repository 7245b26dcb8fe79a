//! Typed errors for product page fetching.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network-level failure (connection reset, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 404. The product page is gone; retrying would not help.
    #[error("product page not found (404): {url}")]
    NotFound { url: String },

    /// Any other non-2xx status. 5xx statuses are treated as transient.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
