//! # Clients
//!
//! Typed handles for talking to the running actors.

pub mod coordinator_client;

pub use coordinator_client::CoordinatorClient;
