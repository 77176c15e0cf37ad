//! Test fixtures and data factories

use items_rs::core::models::{Item, ItemId};
use uuid::Uuid;

/// Factory for creating test items
pub struct ItemFactory;

impl ItemFactory {
    /// Create an unsaved, unprocessed item
    pub fn create() -> Item {
        let suffix = &Uuid::new_v4().to_string()[..8];
        Item::new(
            format!("item_{}", suffix),
            "Test Description",
            "UNPROCESSED",
            format!("test-{}@example.com", suffix),
        )
    }

    /// Create an item with a fixed identifier
    pub fn with_id(id: ItemId) -> Item {
        Self::create().with_id(id)
    }

    /// Create `count` unsaved items
    pub fn many(count: usize) -> Vec<Item> {
        (0..count).map(|_| Self::create()).collect()
    }
}
