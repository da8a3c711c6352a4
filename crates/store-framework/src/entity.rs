//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract that every record type must implement to be
//! managed by the generic [`ResourceStore`](crate::ResourceStore). It names the identifier
//! type, the draft payload used for creation and the entity's error type, and provides
//! validation hooks that run before a record enters the collection.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_create`]
//! - [`StoreEntity::on_update`]
//!
//! Both default to `Ok(())`. Override them to reject records before they are stored.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceStore`.
///
/// Entities are serialized wholesale on every write-through, so the trait requires
/// `Serialize + DeserializeOwned`.
pub trait StoreEntity: Clone + Debug + Serialize + DeserializeOwned + Send + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Display + Debug;

    /// The data required to create a new instance (everything except the id).
    type Draft: Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated id and the draft.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Result<Self, Self::Error>;

    /// Called after `from_draft`, before the record is appended.
    fn on_create(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before a replacement record is swapped into the collection.
    fn on_update(&self, _previous: &Self) -> Result<(), Self::Error> {
        Ok(())
    }
}
