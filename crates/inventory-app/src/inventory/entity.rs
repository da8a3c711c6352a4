//! StoreEntity trait implementation for the Product domain type.
//!
//! Only basic required-field checks are applied: a non-blank name and a finite,
//! non-negative price. `stock` is unsigned by type. `in_stock` is taken as given.

use super::error::InventoryError;
use crate::model::{Product, ProductDraft, ProductId};
use store_framework::StoreEntity;

impl StoreEntity for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    type Error = InventoryError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_draft(id: ProductId, draft: ProductDraft) -> Result<Self, InventoryError> {
        Ok(Product::new(id, draft))
    }

    fn on_create(&self) -> Result<(), InventoryError> {
        validate(self)
    }

    fn on_update(&self, _previous: &Self) -> Result<(), InventoryError> {
        validate(self)
    }
}

fn validate(product: &Product) -> Result<(), InventoryError> {
    if product.name.trim().is_empty() {
        return Err(InventoryError::Validation("name is required".into()));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(InventoryError::Validation(format!(
            "price must be a non-negative number, got {}",
            product.price
        )));
    }
    Ok(())
}
