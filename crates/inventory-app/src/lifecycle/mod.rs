//! # System Lifecycle
//!
//! Starting, wiring and stopping the inventory application.
//!
//! [`InventorySystem::start`] loads the collection, builds the coordinator actor and spawns it
//! with its session handler injected into `run`. The actor is created before it knows its
//! session, so the handler can itself depend on clients created in the meantime.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`; the alert timer holds only a
//!    weak sender and does not keep the channel open
//! 3. **Actor cleans up** - aborts the pending timer, logs the final collection size
//! 4. **Await completion** - [`InventorySystem::shutdown`] awaits the task
//!
//! Every write has already been persisted by the time a response is sent, so nothing is
//! flushed at shutdown.

pub mod inventory_system;

pub use inventory_system::*;
