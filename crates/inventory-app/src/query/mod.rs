//! # Query Engine
//!
//! Derives the visible page of the product table from the collection and a [`QuerySpec`].
//!
//! ## Pipeline
//!
//! 1. **Filter** - category (exact), in-stock flag, and a case-insensitive search over name
//!    and description. All active filters must pass.
//! 2. **Sort** - optional stable price sort.
//! 3. **Paginate** - the half-open slice `[(page-1)*size, page*size)`.
//!
//! ```rust
//! use inventory_app::inventory::bootstrap::sample_products;
//! use inventory_app::query::{render, QuerySpec};
//!
//! let products = sample_products();
//! let mut query = QuerySpec::default();
//! query.set_search("organic");
//!
//! let view = render(&products, &query);
//! assert_eq!(view.total_matched, 2);
//! ```
//!
//! The engine is pure: it borrows the collection and never mutates it.

mod engine;
mod params;

pub use engine::*;
pub use params::*;
