//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::ItemService;
use crate::core::batch::{BatchProcessor, WorkerPool};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so every actix worker shares the same store
/// and the same worker pool.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Item operations
    pub items: Arc<ItemService>,
    /// Worker pool shared by every batch
    pub pool: Arc<WorkerPool>,
}

impl AppState {
    /// Create a new AppState from already-built components
    pub fn new(config: Config, storage: StorageLayer, pool: Arc<WorkerPool>) -> Self {
        let processor = BatchProcessor::from_config(storage.items(), Arc::clone(&pool), config.batch());
        let items = ItemService::new(storage.items(), Arc::new(processor));

        Self {
            config: Arc::new(config),
            storage: Arc::new(storage),
            items: Arc::new(items),
            pool,
        }
    }

    /// Build storage and the worker pool from configuration
    pub async fn from_config(config: &Config) -> Result<Self> {
        let storage = StorageLayer::new(config.storage()).await?;
        let pool = Arc::new(WorkerPool::from_config(config.batch()));

        info!(
            pool_size = pool.size(),
            backend = ?storage.backend(),
            "Application state initialized"
        );

        Ok(Self::new(config.clone(), storage, pool))
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
