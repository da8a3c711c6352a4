//! # Framework Errors
//!
//! This module defines the common error types used throughout the store framework.
//! Storage and serialization failures are kept apart from entity failures so that
//! callers can treat a failed write as best-effort while still rejecting bad input.

/// Errors raised by a [`KeyValueStore`](crate::persistence::KeyValueStore) or while
/// (de)serializing a persisted collection.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum PersistenceError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Errors that can occur within the resource store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
