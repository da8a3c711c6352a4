//! # Store Framework
//!
//! Building blocks for keeping an ordered collection of records in memory and mirroring it to
//! a key-value store after every change.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - your record type, its id, its draft payload and
//!    validation hooks.
//! 2. **Store Layer** ([`ResourceStore`]) - ordered create / update / remove / list with
//!    write-through persistence.
//! 3. **Persistence Layer** ([`PersistenceAdapter`], [`KeyValueStore`]) - one collection per
//!    key, serialized as JSON.
//!
//! ```rust
//! use std::sync::Arc;
//! use serde::{Deserialize, Serialize};
//! use store_framework::{InMemoryKeyValueStore, PersistenceAdapter, ResourceStore, StoreEntity};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Tag { id: u32, label: String }
//! #[derive(Debug)] struct TagDraft { label: String }
//! #[derive(Debug, thiserror::Error)] #[error("Tag error")] struct TagError;
//!
//! impl StoreEntity for Tag {
//!     type Id = u32;
//!     type Draft = TagDraft;
//!     type Error = TagError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_draft(id: u32, draft: TagDraft) -> Result<Self, TagError> {
//!         Ok(Self { id, label: draft.label })
//!     }
//! }
//!
//! let kv = InMemoryKeyValueStore::new();
//! let adapter = PersistenceAdapter::<Tag>::new(Arc::new(kv.clone()), "tags");
//! let mut store = ResourceStore::new(Vec::new(), adapter, || 7);
//!
//! let tag = store.create(TagDraft { label: "urgent".into() }).unwrap();
//! assert_eq!(tag.id, 7);
//!
//! // Already persisted:
//! let reader = PersistenceAdapter::<Tag>::new(Arc::new(kv), "tags");
//! assert_eq!(reader.load().unwrap().len(), 1);
//! ```
//!
//! ## Testing
//!
//! [`mock::MockStorage`] scripts storage failures for write-through tests.

pub mod entity;
pub mod error;
pub mod mock;
pub mod persistence;
pub mod store;
pub mod tracing;

pub use entity::StoreEntity;
pub use error::{PersistenceError, StoreError};
pub use persistence::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, PersistenceAdapter};
pub use store::ResourceStore;
