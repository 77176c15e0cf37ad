//! Storage layer for the item service
//!
//! This module provides the storage collaborator contract used by the item
//! service and the batch processor, plus its in-memory and database backends.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::config::StorageConfig;
use crate::core::models::{Item, ItemId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use memory::InMemoryItemStore;

/// Storage collaborator for items
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All stored items, ordered by identifier
    async fn find_all(&self) -> Result<Vec<Item>>;

    /// Look up a single item; absence is not an error
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Snapshot of every identifier as of call time, ascending
    async fn find_all_ids(&self) -> Result<Vec<ItemId>>;

    /// Insert or update an item and return the persisted representation.
    ///
    /// Items without an identifier get a fresh one. Items with an identifier
    /// replace the stored record with that identifier, or are inserted under
    /// it when no such record exists.
    async fn save(&self, item: Item) -> Result<Item>;

    /// Remove an item; removing a missing item is a no-op
    async fn delete_by_id(&self, id: ItemId) -> Result<()>;

    /// Verify the backend is reachable
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Release backend resources; later calls may fail
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Which backend the storage layer is using
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local map
    Memory,
    /// SeaORM database
    Database,
}

/// Main storage layer that selects and owns the item store backend
#[derive(Clone)]
pub struct StorageLayer {
    items: Arc<dyn ItemStore>,
    backend: StorageBackend,
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("backend", &self.backend)
            .finish()
    }
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if config.database.enabled {
            debug!("Connecting to database");
            let database = database::Database::new(&config.database).await?;
            database.migrate().await?;

            info!("Storage layer initialized with database backend");
            Ok(Self {
                items: Arc::new(database),
                backend: StorageBackend::Database,
            })
        } else {
            warn!("Database disabled, items are kept in memory and lost on restart");
            Ok(Self::in_memory())
        }
    }

    /// Storage layer backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryItemStore::new()), StorageBackend::Memory)
    }

    /// Wrap an existing store
    pub fn with_store(items: Arc<dyn ItemStore>, backend: StorageBackend) -> Self {
        Self { items, backend }
    }

    /// Shared handle to the item store
    pub fn items(&self) -> Arc<dyn ItemStore> {
        Arc::clone(&self.items)
    }

    /// Active backend
    pub fn backend(&self) -> StorageBackend {
        self.backend
    }

    /// Health check for the storage backend
    pub async fn health_check(&self) -> StorageHealthStatus {
        let healthy = match self.items.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Storage health check failed: {}", e);
                false
            }
        };

        StorageHealthStatus {
            backend: self.backend,
            healthy,
        }
    }

    /// Close the backend once no more requests will be served
    pub async fn close(&self) -> Result<()> {
        info!(backend = ?self.backend, "Closing storage layer");
        self.items.close().await
    }
}

/// Storage health status
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageHealthStatus {
    /// Active backend
    pub backend: StorageBackend,
    /// Whether the backend answered
    pub healthy: bool,
}
