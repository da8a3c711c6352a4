//! The session collaborator that receives the logout signal.

use async_trait::async_trait;
use tracing::info;

/// Owner of the user's session. The coordinator only forwards the logout signal.
#[async_trait]
pub trait SessionHandler: Send + Sync {
    async fn logout(&self);
}

/// Session handler that only records the signal in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSession;

#[async_trait]
impl SessionHandler for LoggingSession {
    async fn logout(&self) {
        info!("Logout requested");
    }
}
