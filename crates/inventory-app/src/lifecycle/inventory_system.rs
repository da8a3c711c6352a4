use crate::clients::CoordinatorClient;
use crate::config::Settings;
use crate::coordinator::{CoordinatorActor, LoggingSession, SessionHandler};
use crate::inventory::InventoryStore;
use std::sync::Arc;
use store_framework::{FileKeyValueStore, KeyValueStore, PersistenceAdapter};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running inventory application: one coordinator actor and its client.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(&load_settings());
///
/// system.client.on_add_clicked().await?;
/// system.client.on_form_submit(draft).await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for the coordinator actor.
    pub client: CoordinatorClient,

    handle: JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the system on a [`FileKeyValueStore`] under `settings.storage_dir`, with a
    /// session handler that only logs.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(settings: &Settings) -> Self {
        let storage = Arc::new(FileKeyValueStore::new(settings.storage_dir.clone()));
        Self::start(settings, storage, Arc::new(LoggingSession))
    }

    /// Starts the system on the given storage backend and session handler.
    ///
    /// 1. Loads the stored collection (or the sample set, per `settings.bootstrap`)
    /// 2. Creates the coordinator actor and its client
    /// 3. Spawns the actor with `session` injected
    pub fn start(
        settings: &Settings,
        storage: Arc<dyn KeyValueStore>,
        session: Arc<dyn SessionHandler>,
    ) -> Self {
        let persistence = PersistenceAdapter::new(storage, settings.storage_key.clone());
        let store = InventoryStore::initialize(persistence, &settings.bootstrap);
        info!(
            key = %settings.storage_key,
            products = store.len(),
            "Inventory loaded"
        );

        let (actor, client) =
            CoordinatorActor::new(store, settings.alert_ttl(), settings.channel_capacity);
        let handle = tokio::spawn(actor.run(session));

        Self { client, handle }
    }

    /// Drops the client and waits for the actor to finish.
    ///
    /// Clones of the client held elsewhere keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Coordinator task failed: {:?}", e);
            return Err(format!("Coordinator task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
