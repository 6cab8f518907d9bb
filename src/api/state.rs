//! API server state

use std::sync::Arc;

use crate::relay::DoorRelay;
use crate::store::DoorStore;

/// Context object handed to every handler: the storage handle, the
/// configured shared secret, and the relay port. Constructed once at
/// startup — no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    /// Persistent flag store
    pub store: Arc<DoorStore>,

    /// Shared secret expected in command request bodies
    pub secret: Arc<str>,

    /// Hardware collaborator driven on successful writes
    pub relay: Arc<dyn DoorRelay>,
}

impl AppState {
    pub fn new(
        store: Arc<DoorStore>,
        secret: impl Into<Arc<str>>,
        relay: Arc<dyn DoorRelay>,
    ) -> Self {
        Self {
            store,
            secret: secret.into(),
            relay,
        }
    }
}
