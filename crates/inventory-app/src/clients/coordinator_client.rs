//! # Coordinator Client
//!
//! Async API for driving the [`CoordinatorActor`](crate::coordinator::CoordinatorActor).
//! One method per UI action, plus read-only queries for rendering.
use crate::coordinator::{CoordinatorError, CoordinatorRequest, Response, UiEvent, ViewState};
use crate::model::{Product, ProductDraft, ProductId};
use crate::query::{QuerySpec, RenderedPage};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the coordinator actor. Cheap to clone.
#[derive(Clone)]
pub struct CoordinatorClient {
    sender: mpsc::Sender<CoordinatorRequest>,
}

impl CoordinatorClient {
    pub fn new(sender: mpsc::Sender<CoordinatorRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> CoordinatorRequest,
    ) -> Result<T, CoordinatorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CoordinatorError::ActorClosed)?;
        response.await.map_err(|_| CoordinatorError::ActorDropped)?
    }

    async fn event(&self, event: UiEvent) -> Result<ViewState, CoordinatorError> {
        debug!("Sending event");
        self.request(|respond_to| CoordinatorRequest::Event { event, respond_to })
            .await
    }

    /// Opens the form in create mode.
    #[instrument(skip(self))]
    pub async fn on_add_clicked(&self) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::AddClicked).await
    }

    /// Opens the form pre-filled with `product`.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn on_edit_clicked(&self, product: Product) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::EditClicked(product)).await
    }

    /// Asks for confirmation before deleting `id`.
    #[instrument(skip(self))]
    pub async fn on_delete_clicked(&self, id: ProductId) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::DeleteClicked(id)).await
    }

    /// Submits the open form.
    ///
    /// Fails with [`CoordinatorError::FormNotOpen`] when no form is open, or with the
    /// inventory's validation error, in which case the form stays open.
    #[instrument(skip(self))]
    pub async fn on_form_submit(&self, draft: ProductDraft) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::FormSubmit(draft)).await
    }

    #[instrument(skip(self))]
    pub async fn on_form_cancel(&self) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::FormCancel).await
    }

    #[instrument(skip(self))]
    pub async fn on_confirm_delete(&self) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::ConfirmDelete).await
    }

    #[instrument(skip(self))]
    pub async fn on_cancel_delete(&self) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::CancelDelete).await
    }

    #[instrument(skip(self))]
    pub async fn on_alert_dismiss(&self) -> Result<ViewState, CoordinatorError> {
        self.event(UiEvent::AlertDismiss).await
    }

    /// Forwards the logout signal to the session handler.
    #[instrument(skip(self))]
    pub async fn on_logout(&self) -> Result<(), CoordinatorError> {
        self.request(|respond_to| CoordinatorRequest::Logout { respond_to })
            .await
    }

    /// Renders the product table for `query` against the current collection.
    #[instrument(skip(self))]
    pub async fn render(&self, query: QuerySpec) -> Result<RenderedPage, CoordinatorError> {
        self.request(|respond_to| CoordinatorRequest::Render { query, respond_to })
            .await
    }

    /// Category options for the filter dropdown.
    pub async fn categories(&self) -> Result<Vec<String>, CoordinatorError> {
        self.request(|respond_to| CoordinatorRequest::Categories { respond_to })
            .await
    }

    /// The whole collection in order.
    pub async fn products(&self) -> Result<Vec<Product>, CoordinatorError> {
        self.request(|respond_to| CoordinatorRequest::Products { respond_to })
            .await
    }

    pub async fn view_state(&self) -> Result<ViewState, CoordinatorError> {
        self.request(|respond_to| CoordinatorRequest::ViewState { respond_to })
            .await
    }
}
