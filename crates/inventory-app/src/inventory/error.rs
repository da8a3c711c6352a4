//! Error types for the Inventory Store.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// A required field is missing or out of range.
    #[error("Invalid product: {0}")]
    Validation(String),

    /// The underlying store rejected the operation.
    #[error("Product store error: {0}")]
    Store(String),
}

impl From<store_framework::StoreError> for InventoryError {
    fn from(e: store_framework::StoreError) -> Self {
        match e {
            store_framework::StoreError::EntityError(inner) => match inner.downcast::<InventoryError>() {
                Ok(inventory_error) => *inventory_error,
                Err(other) => InventoryError::Store(other.to_string()),
            },
        }
    }
}
