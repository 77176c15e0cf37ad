//! Item store wrapper that counts calls and can hide items at fetch time

use async_trait::async_trait;
use items_rs::core::models::{Item, ItemId};
use items_rs::storage::{InMemoryItemStore, ItemStore};
use items_rs::utils::error::Result;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store that records every `save` and `find_by_id`
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: InMemoryItemStore,
    fetches: AtomicUsize,
    saves: AtomicUsize,
    saved: Mutex<Vec<Item>>,
    vanished: Mutex<HashSet<ItemId>>,
}

impl CountingStore {
    /// Store pre-populated with items
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            inner: InMemoryItemStore::with_items(items),
            ..Default::default()
        }
    }

    /// Keep `id` in the identifier snapshot but report it missing when fetched
    pub fn vanish(&self, id: ItemId) {
        self.vanished.lock().insert(id);
    }

    /// Number of `find_by_id` calls
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of `save` calls
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Items passed to `save`, in call order
    pub fn saved_items(&self) -> Vec<Item> {
        self.saved.lock().clone()
    }

    /// Reset the call counters
    pub fn reset_counts(&self) {
        self.fetches.store(0, Ordering::SeqCst);
        self.saves.store(0, Ordering::SeqCst);
        self.saved.lock().clear();
    }
}

#[async_trait]
impl ItemStore for CountingStore {
    async fn find_all(&self) -> Result<Vec<Item>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.vanished.lock().contains(&id) {
            return Ok(None);
        }
        self.inner.find_by_id(id).await
    }

    async fn find_all_ids(&self) -> Result<Vec<ItemId>> {
        self.inner.find_all_ids().await
    }

    async fn save(&self, item: Item) -> Result<Item> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.saved.lock().push(item.clone());
        self.inner.save(item).await
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<()> {
        self.inner.delete_by_id(id).await
    }
}
