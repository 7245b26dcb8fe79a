//! Catalog persistence seam.

use std::sync::{Arc, Mutex};

use navcat_core::CanonicalProduct;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog store failure: {reason}")]
    Backend { reason: String },
}

/// Lookup and upsert operations the ingestor needs from a catalog backend.
///
/// The three finders mirror the reconciliation chain: external id first,
/// then slug, then exact name.
#[allow(async_fn_in_trait)]
pub trait CatalogStore {
    /// # Errors
    /// Returns [`StoreError`] if the backend lookup fails.
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<CanonicalProduct>, StoreError>;

    /// # Errors
    /// Returns [`StoreError`] if the backend lookup fails.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<CanonicalProduct>, StoreError>;

    /// # Errors
    /// Returns [`StoreError`] if the backend lookup fails.
    async fn find_by_name(&self, name: &str) -> Result<Option<CanonicalProduct>, StoreError>;

    /// Replaces the stored product matching the candidate's identity, or
    /// inserts it when no match exists.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backend write fails.
    async fn upsert(&self, product: CanonicalProduct) -> Result<(), StoreError>;
}

/// In-memory [`CatalogStore`]; the default backend and the one tests run
/// against.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Arc<Mutex<Vec<CanonicalProduct>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored products.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the lock is poisoned.
    pub fn all(&self) -> Result<Vec<CanonicalProduct>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<CanonicalProduct>>, StoreError> {
        self.products.lock().map_err(|_| StoreError::Backend {
            reason: "catalog store mutex poisoned".to_string(),
        })
    }
}

impl CatalogStore for MemoryStore {
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<CanonicalProduct>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .find(|p| p.external_id == external_id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<CanonicalProduct>, StoreError> {
        Ok(self.lock()?.iter().find(|p| p.slug == slug).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<CanonicalProduct>, StoreError> {
        Ok(self.lock()?.iter().find(|p| p.name == name).cloned())
    }

    async fn upsert(&self, product: CanonicalProduct) -> Result<(), StoreError> {
        let mut products = self.lock()?;
        let existing = products.iter_mut().find(|p| {
            p.external_id == product.external_id
                || p.slug == product.slug
                || p.name == product.name
        });
        match existing {
            Some(slot) => *slot = product,
            None => products.push(product),
        }
        Ok(())
    }
}
