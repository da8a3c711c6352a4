//! # Observability & Tracing
//!
//! Structured logging for the store and everything built on it.
//!
//! The store logs every mutation with an `entity_type` field (the short type name of the
//! record) plus the record `id` and the collection `size`:
//!
//! ```text
//! INFO Created entity_type="Product" id=prod_3f2a9c... size=11
//! INFO Removed entity_type="Product" id=prod_4 size=10
//! WARN Write-through failed entity_type="Product" key="products" error=Storage error: disk full
//! ```
//!
//! Run with `RUST_LOG=debug` to also see full payloads (`?draft`, `?item`) and every
//! persistence read and write.

/// Initializes the tracing subscriber.
///
/// Filtering comes from `RUST_LOG`; the compact format hides module paths because the
/// structured `entity_type` field already says where a line came from.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
