//! # Inventory Store
//!
//! Owns the canonical product collection and mirrors it to storage after every change.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Product`]
//!   (required-field validation)
//! - [`error`] - [`InventoryError`]
//! - [`bootstrap`] - the sample set and [`BootstrapPolicy`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use inventory_app::inventory::{BootstrapPolicy, InventoryStore};
//! use inventory_app::model::ProductDraft;
//! use store_framework::{InMemoryKeyValueStore, PersistenceAdapter};
//!
//! let adapter = PersistenceAdapter::new(Arc::new(InMemoryKeyValueStore::new()), "products");
//! let mut store = InventoryStore::initialize(adapter, &BootstrapPolicy::default());
//! assert_eq!(store.len(), 10); // nothing stored yet, so the sample set is loaded
//!
//! let lamp = store
//!     .create(ProductDraft::new("Desk Lamp", 19.99, "Home", 5, true))
//!     .unwrap();
//! assert!(lamp.id.as_str().starts_with("prod_"));
//! assert_eq!(store.len(), 11);
//! ```

pub mod bootstrap;
pub mod entity;
pub mod error;

pub use bootstrap::{sample_products, BootstrapPolicy};
pub use error::*;

use crate::model::{Product, ProductDraft, ProductId};
use store_framework::{PersistenceAdapter, PersistenceError, ResourceStore};
use tracing::info;
use uuid::Uuid;

/// Generates a fresh product id: `prod_` followed by a v4 UUID.
pub fn new_product_id() -> ProductId {
    ProductId(format!("prod_{}", Uuid::new_v4().simple()))
}

/// The product collection with write-through persistence.
pub struct InventoryStore {
    inner: ResourceStore<Product>,
}

impl InventoryStore {
    /// Wraps `products` as-is, without loading or saving anything.
    pub fn new(products: Vec<Product>, persistence: PersistenceAdapter<Product>) -> Self {
        Self {
            inner: ResourceStore::new(products, persistence, new_product_id),
        }
    }

    /// Loads the stored collection, falling back to the sample set as `policy` dictates.
    ///
    /// The sample set is saved immediately when it is used.
    pub fn initialize(persistence: PersistenceAdapter<Product>, policy: &BootstrapPolicy) -> Self {
        let stored = persistence.load();
        let stored_len = stored.as_ref().map(Vec::len);

        if policy.should_bootstrap(stored.as_deref()) {
            info!(?stored_len, "Loading sample products");
            let mut store = Self::new(Vec::new(), persistence);
            store.inner.replace_all(sample_products());
            store
        } else {
            info!(?stored_len, "Loaded stored products");
            Self::new(stored.unwrap_or_default(), persistence)
        }
    }

    /// Validates `draft`, assigns a new id, appends and persists.
    pub fn create(&mut self, draft: ProductDraft) -> Result<Product, InventoryError> {
        Ok(self.inner.create(draft)?)
    }

    /// Replaces the product with the same id. Unknown ids leave the collection unchanged.
    pub fn update(&mut self, product: Product) -> Result<&[Product], InventoryError> {
        self.inner.update(product)?;
        Ok(self.inner.list())
    }

    /// Removes the product with `id`, if present. Removing twice is the same as once.
    pub fn remove(&mut self, id: &ProductId) -> &[Product] {
        self.inner.remove(id);
        self.inner.list()
    }

    pub fn list(&self) -> &[Product] {
        self.inner.list()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The most recent failed write-through, if the last save failed.
    pub fn last_save_error(&self) -> Option<&PersistenceError> {
        self.inner.last_save_error()
    }
}
