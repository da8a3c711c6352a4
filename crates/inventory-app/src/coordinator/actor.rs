//! # Coordinator Actor
//!
//! Owns the [`Coordinator`] inside a single Tokio task and processes requests one at a time,
//! so the inventory and the UI state are never shared between threads.
//!
//! The actor also owns the alert auto-hide timer. When an event shows an expiring alert, a
//! timer task is spawned that sleeps for the alert TTL and then sends
//! [`CoordinatorRequest::AlertExpired`] back to the actor. The timer holds only a weak sender,
//! so it never keeps the actor alive, and it is aborted when the alert is replaced, dismissed
//! or the actor stops.

use super::error::CoordinatorError;
use super::machine::{Coordinator, UiEvent};
use super::messages::CoordinatorRequest;
use super::session::SessionHandler;
use crate::clients::CoordinatorClient;
use crate::inventory::InventoryStore;
use crate::query::{categories, render};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub struct CoordinatorActor {
    receiver: mpsc::Receiver<CoordinatorRequest>,
    timer_sender: mpsc::WeakSender<CoordinatorRequest>,
    coordinator: Coordinator,
    alert_ttl: Duration,
    alert_timer: Option<JoinHandle<()>>,
}

impl CoordinatorActor {
    /// Creates the actor and the client that talks to it.
    ///
    /// `buffer_size` is the capacity of the request channel.
    pub fn new(
        store: InventoryStore,
        alert_ttl: Duration,
        buffer_size: usize,
    ) -> (Self, CoordinatorClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            timer_sender: sender.downgrade(),
            coordinator: Coordinator::new(store),
            alert_ttl,
            alert_timer: None,
        };
        (actor, CoordinatorClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    ///
    /// `session` receives the logout signal.
    pub async fn run(mut self, session: Arc<dyn SessionHandler>) {
        info!(
            products = self.coordinator.store().len(),
            alert_ttl = ?self.alert_ttl,
            "Coordinator started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CoordinatorRequest::Event { event, respond_to } => {
                    let result = self.handle_event(event);
                    let _ = respond_to.send(result.map(|_| self.coordinator.view_state()));
                }
                CoordinatorRequest::AlertExpired { generation } => {
                    if self.coordinator.expire_alert(generation) {
                        debug!(generation, "Alert hidden");
                        self.alert_timer = None;
                    }
                }
                CoordinatorRequest::Logout { respond_to } => {
                    info!("Forwarding logout");
                    session.logout().await;
                    let _ = respond_to.send(Ok(()));
                }
                CoordinatorRequest::Render { query, respond_to } => {
                    let page = render(self.coordinator.store().list(), &query);
                    debug!(
                        total_matched = page.total_matched,
                        page = page.page,
                        "Render"
                    );
                    let _ = respond_to.send(Ok(page.into()));
                }
                CoordinatorRequest::Categories { respond_to } => {
                    let _ = respond_to.send(Ok(categories(self.coordinator.store().list())));
                }
                CoordinatorRequest::Products { respond_to } => {
                    let _ = respond_to.send(Ok(self.coordinator.store().list().to_vec()));
                }
                CoordinatorRequest::ViewState { respond_to } => {
                    let _ = respond_to.send(Ok(self.coordinator.view_state()));
                }
            }
        }

        if let Some(timer) = self.alert_timer.take() {
            timer.abort();
        }
        info!(size = self.coordinator.store().len(), "Shutdown");
    }

    fn handle_event(&mut self, event: UiEvent) -> Result<(), CoordinatorError> {
        let before = self.coordinator.alert_generation();
        if let Err(e) = self.coordinator.handle(event) {
            warn!(error = %e, "Event rejected");
            return Err(e);
        }

        let after = self.coordinator.alert_generation();
        let alert = self.coordinator.view_state().alert;
        if after != before || alert.alert().is_none() {
            if let Some(timer) = self.alert_timer.take() {
                timer.abort();
            }
        }
        if after != before && alert.alert().is_some_and(|a| a.expires) {
            self.alert_timer = Some(self.spawn_alert_timer(after));
        }
        Ok(())
    }

    fn spawn_alert_timer(&self, generation: u64) -> JoinHandle<()> {
        let sender = self.timer_sender.clone();
        let ttl = self.alert_ttl;
        debug!(generation, "Alert timer scheduled");
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(sender) = sender.upgrade() {
                let _ = sender
                    .send(CoordinatorRequest::AlertExpired { generation })
                    .await;
            }
        })
    }
}
