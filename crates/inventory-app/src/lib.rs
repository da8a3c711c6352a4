//! # Inventory App
//!
//! A product inventory manager: a filterable, sortable, paginated product table over a
//! collection that is written through to a key-value store on every change.
//!
//! - **[model]**: the [`Product`](model::Product) record and its draft.
//! - **[query]**: pure filtering, sorting and pagination.
//! - **[inventory]**: the product collection with write-through persistence and the sample
//!   set used on first run.
//! - **[coordinator]**: the UI state machine (form, delete confirmation, alert) running as an
//!   actor.
//! - **[clients]**: the typed handle for the coordinator actor.
//! - **[lifecycle]**: starting and stopping the whole system.
//! - **[config]**: settings from `inventory.toml`.

pub mod clients;
pub mod config;
pub mod coordinator;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod query;
