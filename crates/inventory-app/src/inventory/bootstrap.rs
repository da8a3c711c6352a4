//! Sample data and the rule deciding when it replaces the stored collection.

use crate::model::{Product, ProductDraft, ProductId};
use serde::{Deserialize, Serialize};

/// When to discard the stored collection in favour of [`sample_products`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapPolicy {
    /// Stored collections with this many products or fewer are replaced.
    pub min_trusted_len: usize,
    /// Also replace the stored collection when none of its ids passes [`looks_user_created`].
    ///
    /// Off by default: generated `prod_…` ids never pass the check, so enabling it
    /// discards every stored collection.
    pub require_user_ids: bool,
}

impl Default for BootstrapPolicy {
    fn default() -> Self {
        Self {
            min_trusted_len: 3,
            require_user_ids: false,
        }
    }
}

impl BootstrapPolicy {
    /// Whether `stored` (absent when missing or unreadable) should be replaced.
    pub fn should_bootstrap(&self, stored: Option<&[Product]>) -> bool {
        let Some(stored) = stored else {
            return true;
        };
        if stored.len() <= self.min_trusted_len {
            return true;
        }
        self.require_user_ids && !stored.iter().any(|p| looks_user_created(&p.id))
    }
}

/// The id-shape test: the id read as a number is greater than 3.
///
/// Non-numeric ids (including every generated one) never pass.
pub fn looks_user_created(id: &ProductId) -> bool {
    id.as_str()
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| n > 3.0)
}

/// The fixed 10-product sample set.
pub fn sample_products() -> Vec<Product> {
    let samples = [
        ("Laptop", 999.99, "Electronics", 15, true, "High-performance laptop for work and gaming"),
        ("T-Shirt", 24.99, "Apparel", 50, true, "Comfortable cotton t-shirt"),
        ("Organic Apples", 4.99, "Grocery", 0, false, "Fresh organic apples from local farms"),
        ("Wireless Headphones", 149.99, "Electronics", 25, true, "Noise-cancelling wireless headphones with premium sound quality"),
        ("Denim Jeans", 79.99, "Apparel", 30, true, "Classic blue denim jeans with comfortable fit"),
        ("Organic Bananas", 2.99, "Grocery", 100, true, "Fresh organic bananas, perfect for smoothies"),
        ("Smartphone", 699.99, "Electronics", 8, true, "Latest smartphone with advanced camera and fast processor"),
        ("Running Shoes", 129.99, "Apparel", 0, false, "Lightweight running shoes for maximum comfort"),
        ("Whole Grain Bread", 3.49, "Grocery", 45, true, "Freshly baked whole grain bread with seeds"),
        ("Tablet", 399.99, "Electronics", 12, true, "10-inch tablet perfect for work and entertainment"),
    ];

    samples
        .into_iter()
        .enumerate()
        .map(|(i, (name, price, category, stock, in_stock, description))| {
            Product::new(
                ProductId(format!("prod_{}", i + 1)),
                ProductDraft::new(name, price, category, stock, in_stock).with_description(description),
            )
        })
        .collect()
}
