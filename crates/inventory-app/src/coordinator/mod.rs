//! # Interaction Coordinator
//!
//! Turns UI actions into inventory operations and tracks the transient UI state around them:
//! the product form, the delete confirmation modal and the alert banner.
//!
//! ## Structure
//!
//! - [`machine`] - [`Coordinator`], the synchronous state machine, and [`UiEvent`]
//! - [`actor`] - [`CoordinatorActor`], which owns the machine in a Tokio task and runs the
//!   alert auto-hide timer
//! - [`messages`] - the request protocol between the actor and
//!   [`CoordinatorClient`](crate::clients::CoordinatorClient)
//! - [`state`] - [`ViewState`] and its parts
//! - [`session`] - [`SessionHandler`], which receives the logout signal
//!
//! ## Flows
//!
//! | Event | Effect |
//! |-------|--------|
//! | `AddClicked` | form opens in create mode |
//! | `EditClicked(p)` | form opens pre-filled with `p` |
//! | `FormSubmit(d)` | create or update, then the form closes |
//! | `FormCancel` | form closes, nothing is written |
//! | `DeleteClicked(id)` | confirmation opens with the product's name |
//! | `ConfirmDelete` | product removed, expiring success alert |
//! | `CancelDelete` | confirmation closes, nothing is written |
//! | `AlertDismiss` | alert hidden |
//!
//! A successful create shows a success alert that stays until dismissed. Edits show no alert.

pub mod actor;
pub mod error;
pub mod machine;
pub mod messages;
pub mod session;
pub mod state;

pub use actor::CoordinatorActor;
pub use error::CoordinatorError;
pub use machine::{
    product_deleted_message, Coordinator, UiEvent, PRODUCT_ADDED_MESSAGE, UNKNOWN_PRODUCT_NAME,
};
pub use messages::{CoordinatorRequest, Response};
pub use session::{LoggingSession, SessionHandler};
pub use state::*;
