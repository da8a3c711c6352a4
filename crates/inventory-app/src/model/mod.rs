//! Pure data structures: the [`Product`] record and its creation payload.

pub mod product;

pub use product::*;
