//! Item service: CRUD operations and batch processing over the item store

use crate::core::batch::{BatchProcessor, BatchReport};
use crate::core::models::{Item, ItemId};
use crate::storage::ItemStore;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tracing::{debug, info};

/// Business operations on items
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    processor: Arc<BatchProcessor>,
}

impl ItemService {
    /// Create a new item service
    pub fn new(store: Arc<dyn ItemStore>, processor: Arc<BatchProcessor>) -> Self {
        Self { store, processor }
    }

    /// Batch processor used by [`Self::process_all`]
    pub fn processor(&self) -> &Arc<BatchProcessor> {
        &self.processor
    }

    /// All items
    pub async fn find_all(&self) -> Result<Vec<Item>> {
        self.store.find_all().await
    }

    /// One item, or `None` when absent
    pub async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        validate_id(id)?;
        self.store.find_by_id(id).await
    }

    /// Insert or update an item
    pub async fn save(&self, item: Item) -> Result<Item> {
        if let Some(id) = item.id {
            validate_id(id)?;
        }

        let saved = self.store.save(item).await?;
        debug!(item_id = ?saved.id, "Item saved");
        Ok(saved)
    }

    /// Replace an existing item, keeping the identifier from the caller
    pub async fn update(&self, id: ItemId, item: Item) -> Result<Item> {
        validate_id(id)?;

        if self.store.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(format!("Item {} not found", id)));
        }

        self.store.save(item.with_id(id)).await
    }

    /// Delete an existing item
    pub async fn delete_by_id(&self, id: ItemId) -> Result<()> {
        validate_id(id)?;

        if self.store.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(format!("Item {} not found", id)));
        }

        self.store.delete_by_id(id).await?;
        info!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Process every item; fails if any item could not be processed
    pub async fn process_all(&self) -> Result<Vec<Item>> {
        Ok(self.processor.process_all().await?)
    }

    /// Process every item and report successes and failures separately
    pub async fn process_all_report(&self) -> Result<BatchReport> {
        Ok(self.processor.process_all_report().await?)
    }
}

fn validate_id(id: ItemId) -> Result<()> {
    if id <= 0 {
        return Err(ServiceError::validation("Id cannot be negative or zero"));
    }
    Ok(())
}
