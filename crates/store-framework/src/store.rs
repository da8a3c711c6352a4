//! # Resource Store
//!
//! This module defines the `ResourceStore`, the component that owns an ordered collection of
//! entities and mirrors it to a [`PersistenceAdapter`] after every successful mutation.
//!
//! Unlike a keyed map the store keeps insertion order, since that order is the display order
//! before any sorting is applied. Lookups are linear scans.

use crate::entity::StoreEntity;
use crate::error::{PersistenceError, StoreError};
use crate::persistence::PersistenceAdapter;
use tracing::{debug, info, warn};

/// An ordered, write-through collection of `T`.
///
/// # Write-through
/// `create`, `update`, `remove` and `replace_all` call [`PersistenceAdapter::save`] with the
/// whole collection as their last step. A failed save is logged and remembered in
/// [`ResourceStore::last_save_error`] but never turns the mutation into an error: the
/// in-memory collection stays authoritative.
///
/// # Operations
///
/// * **Create**:
///     1. Generates a new id with the injected `next_id` function.
///     2. Calls `T::from_draft` and the `on_create` hook.
///     3. Appends the entity and persists.
///
/// * **Update**:
///     1. Finds the entry with the same id (no-op when absent).
///     2. Calls the `on_update` hook with the previous value.
///     3. Replaces the entry in place and persists.
///
/// * **Remove**:
///     1. Finds the entry (no-op when absent).
///     2. Removes it and persists.
pub struct ResourceStore<T: StoreEntity> {
    items: Vec<T>,
    persistence: PersistenceAdapter<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send>,
    last_save_error: Option<PersistenceError>,
}

impl<T: StoreEntity> ResourceStore<T> {
    /// Creates a store holding `items` without persisting them.
    pub fn new(
        items: Vec<T>,
        persistence: PersistenceAdapter<T>,
        next_id_fn: impl Fn() -> T::Id + Send + 'static,
    ) -> Self {
        Self {
            items,
            persistence,
            next_id_fn: Box::new(next_id_fn),
            last_save_error: None,
        }
    }

    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    pub fn persistence(&self) -> &PersistenceAdapter<T> {
        &self.persistence
    }

    /// Appends a new entity built from `draft`.
    pub fn create(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?draft, "Create");
        let id = (self.next_id_fn)();

        let item = T::from_draft(id, draft).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            StoreError::EntityError(Box::new(e))
        })?;
        if let Err(e) = item.on_create() {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(StoreError::EntityError(Box::new(e)));
        }

        self.items.push(item.clone());
        info!(entity_type, id = %item.id(), size = self.items.len(), "Created");
        self.persist();
        Ok(item)
    }

    /// Replaces the entry sharing `item`'s id. Returns `Ok(false)` when no entry matched.
    pub fn update(&mut self, item: T) -> Result<bool, StoreError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?item, "Update");
        let Some(position) = self.position(item.id()) else {
            warn!(entity_type, id = %item.id(), "Not found");
            return Ok(false);
        };

        if let Err(e) = item.on_update(&self.items[position]) {
            warn!(entity_type, id = %item.id(), error = %e, "Update failed");
            return Err(StoreError::EntityError(Box::new(e)));
        }

        info!(entity_type, id = %item.id(), "Updated");
        self.items[position] = item;
        self.persist();
        Ok(true)
    }

    /// Removes the entry with `id`, returning it. `None` when absent.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Remove");
        let Some(position) = self.position(id) else {
            warn!(entity_type, %id, "Not found");
            return None;
        };

        let removed = self.items.remove(position);
        info!(entity_type, %id, size = self.items.len(), "Removed");
        self.persist();
        Some(removed)
    }

    /// Swaps in a whole new collection and persists it.
    pub fn replace_all(&mut self, items: Vec<T>) {
        info!(entity_type = Self::entity_type(), size = items.len(), "Replaced collection");
        self.items = items;
        self.persist();
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most recent write-through failure, cleared by the next successful save.
    pub fn last_save_error(&self) -> Option<&PersistenceError> {
        self.last_save_error.as_ref()
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.items) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                warn!(
                    entity_type = Self::entity_type(),
                    key = self.persistence.key(),
                    error = %e,
                    "Write-through failed"
                );
                self.last_save_error = Some(e);
            }
        }
    }
}
