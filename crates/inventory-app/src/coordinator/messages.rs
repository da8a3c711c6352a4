//! Messages exchanged between [`CoordinatorClient`](crate::clients::CoordinatorClient) and
//! [`CoordinatorActor`](super::CoordinatorActor).

use super::error::CoordinatorError;
use super::machine::UiEvent;
use super::state::ViewState;
use crate::model::Product;
use crate::query::{QuerySpec, RenderedPage};
use tokio::sync::oneshot;

/// One-shot response channel used by the coordinator.
pub type Response<T> = oneshot::Sender<Result<T, CoordinatorError>>;

#[derive(Debug)]
pub enum CoordinatorRequest {
    /// A UI action. Answers with the view state after the event.
    Event {
        event: UiEvent,
        respond_to: Response<ViewState>,
    },
    /// Sent by the auto-hide timer, never by clients.
    AlertExpired { generation: u64 },
    Logout { respond_to: Response<()> },
    Render {
        query: QuerySpec,
        respond_to: Response<RenderedPage>,
    },
    Categories { respond_to: Response<Vec<String>> },
    Products { respond_to: Response<Vec<Product>> },
    ViewState { respond_to: Response<ViewState> },
}
