//! Storage abstraction layer
//!
//! Provides a unified interface over the non-volatile medium holding
//! the door state file (local filesystem in this build).

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;

pub mod local;

/// Storage backend trait
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read an object from storage
    async fn get(&self, key: &str) -> Result<Bytes>;

    /// Write an object to storage (full overwrite, not an append)
    async fn put(&self, key: &str, data: Bytes) -> Result<()>;

    /// Check if an object exists
    async fn exists(&self, key: &str) -> Result<bool>;
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Local { root_path: String },
}

/// Create a storage backend from config
pub fn create_storage(config: StorageConfig) -> Result<Box<dyn StorageBackend>> {
    match config {
        StorageConfig::Local { root_path } => {
            let backend = local::LocalStorage::new(root_path)?;
            Ok(Box::new(backend))
        }
    }
}
