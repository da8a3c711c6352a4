//! Error types for the Interaction Coordinator.

use crate::inventory::InventoryError;
use thiserror::Error;

/// Errors that can occur while handling a UI event.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoordinatorError {
    /// A form submission arrived while no form was open.
    #[error("No product form is open")]
    FormNotOpen,

    /// The inventory rejected the change (e.g. a blank name).
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The coordinator actor is no longer running.
    #[error("Coordinator closed")]
    ActorClosed,

    /// The coordinator dropped the response channel.
    #[error("Coordinator dropped response channel")]
    ActorDropped,
}
