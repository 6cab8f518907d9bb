//! Persistent flag store
//!
//! Owns the single backing file holding the door state. Every read and
//! write goes through the storage backend directly — there is no
//! in-memory copy of the flag, so the file is always authoritative.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Mutex;

use crate::storage::StorageBackend;
use crate::types::DoorState;
use crate::{Error, Result};

/// Default contents written at first boot.
const DEFAULT_STATE: DoorState = DoorState::Closed;

/// Typed wrapper over the backing file.
///
/// File access is serialized through an internal mutex: the host runs
/// handlers concurrently, and the backing file has no other protection
/// against interleaved writes.
pub struct DoorStore {
    storage: Arc<dyn StorageBackend>,
    key: String,
    lock: Mutex<()>,
}

impl DoorStore {
    pub fn new(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            lock: Mutex::new(()),
        }
    }

    /// First-boot initialization: create the backing file with the
    /// default state if it does not exist yet. Idempotent.
    ///
    /// Never fails the boot sequence — on storage trouble the store is
    /// left absent and reads report the problem per request instead.
    pub async fn initialize(&self) {
        let _guard = self.lock.lock().await;

        match self.storage.exists(&self.key).await {
            Ok(true) => {
                tracing::debug!(key = %self.key, "state file present");
            }
            Ok(false) => {
                tracing::info!(key = %self.key, "state file missing, writing default");
                let default = Bytes::from_static(DEFAULT_STATE.as_text().as_bytes());
                match self.storage.put(&self.key, default).await {
                    Ok(()) => {
                        tracing::info!(key = %self.key, "default state file created");
                    }
                    Err(err) => {
                        tracing::error!(key = %self.key, error = %err, "unable to create state file");
                    }
                }
            }
            Err(err) => {
                tracing::error!(key = %self.key, error = %err, "unable to probe state file");
            }
        }
    }

    /// Raw stored text, byte-exact. `NotFound` if the file is absent.
    pub async fn read_raw(&self) -> Result<String> {
        let _guard = self.lock.lock().await;

        let data = self.storage.get(&self.key).await?;
        String::from_utf8(data.to_vec())
            .map_err(|_| Error::CorruptState("state file is not valid UTF-8".to_string()))
    }

    /// Typed read of the stored flag.
    pub async fn read(&self) -> Result<DoorState> {
        let text = self.read_raw().await?;
        DoorState::from_text(&text)
    }

    /// Overwrite the stored flag. Full overwrite, last writer wins.
    pub async fn write(&self, state: DoorState) -> Result<()> {
        let _guard = self.lock.lock().await;

        let data = Bytes::from_static(state.as_text().as_bytes());
        self.storage.put(&self.key, data).await?;
        tracing::debug!(key = %self.key, state = %state, "state file written");
        Ok(())
    }
}
