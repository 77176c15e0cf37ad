//! In-memory item store
//!
//! Used when no database is configured, and as a fast backend in tests.

use super::ItemStore;
use crate::core::models::{Item, ItemId};
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// Item store backed by an ordered map
#[derive(Debug)]
pub struct InMemoryItemStore {
    items: RwLock<BTreeMap<ItemId, Item>>,
    next_id: AtomicI64,
}

impl InMemoryItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Create a store pre-populated with items, assigning ids where missing
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let store = Self::new();
        for item in items {
            store.insert(item);
        }
        store
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn insert(&self, mut item: Item) -> Item {
        let id = match item.id {
            Some(id) => {
                // Keep the sequence ahead of explicitly chosen ids
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        item.id = Some(id);
        self.items.write().insert(id, item.clone());
        item
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn find_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.items.read().get(&id).cloned())
    }

    async fn find_all_ids(&self) -> Result<Vec<ItemId>> {
        Ok(self.items.read().keys().copied().collect())
    }

    async fn save(&self, item: Item) -> Result<Item> {
        debug!(item_id = ?item.id, "Saving item");
        Ok(self.insert(item))
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<()> {
        debug!(item_id = id, "Deleting item");
        self.items.write().remove(&id);
        Ok(())
    }
}
