/// Represents a product in the inventory.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](store_framework::StoreEntity) trait,
/// allowing it to be managed by a [`ResourceStore`](store_framework::ResourceStore).
///
/// See [`impl StoreEntity for Product`](#impl-StoreEntity-for-Product) for the
/// validation applied on create and update.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product record.
///
/// `in_stock` is stored independently of `stock`; nothing keeps the two in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Creates a new Product from an id and the form payload.
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            stock: draft.stock,
            in_stock: draft.in_stock,
            description: draft.description,
        }
    }

    /// The editable fields of this product, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            category: self.category.clone(),
            stock: self.stock,
            in_stock: self.in_stock,
            description: self.description.clone(),
        }
    }
}

/// DTO for Product creation and edits: every field except the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub in_stock: bool,
    pub description: Option<String>,
}

impl ProductDraft {
    /// # Arguments
    /// * `name` - Product name (required)
    /// * `price` - Unit price, non-negative
    /// * `category` - Free-form category label
    /// * `stock` - Units on hand
    /// * `in_stock` - Availability flag shown in listings
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        stock: u32,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            stock,
            in_stock,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let product = Product::new(
            "prod_1".into(),
            ProductDraft::new("Laptop", 999.99, "Electronics", 15, true).with_description("Fast"),
        );
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], "prod_1");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["stock"], 15);
        assert_eq!(json["price"], 999.99);
        assert_eq!(json["description"], "Fast");
    }

    #[test]
    fn test_description_absent_or_empty() {
        let absent: Product = serde_json::from_str(
            r#"{"id":"p","name":"n","price":1.0,"category":"c","stock":0,"inStock":false}"#,
        )
        .unwrap();
        assert_eq!(absent.description, None);
        assert!(!serde_json::to_string(&absent).unwrap().contains("description"));

        let empty: Product = serde_json::from_str(
            r#"{"id":"p","name":"n","price":1,"category":"c","stock":0,"inStock":false,"description":""}"#,
        )
        .unwrap();
        assert_eq!(empty.description.as_deref(), Some(""));
        assert_eq!(empty.price, 1.0);
    }
}
