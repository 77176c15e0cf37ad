//! Item model

use serde::{Deserialize, Serialize};

/// Storage-assigned item identifier
pub type ItemId = i64;

/// Status written by the batch processor
pub const STATUS_PROCESSED: &str = "PROCESSED";

/// A stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Item {
    /// Identifier, `None` until the item is first saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Free-text status
    pub status: String,
    /// Contact email
    pub email: String,
}

impl Item {
    /// Create an unsaved item
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            status: status.into(),
            email: email.into(),
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Mark the item as processed
    pub fn mark_processed(&mut self) {
        self.status = STATUS_PROCESSED.to_string();
    }

    /// Whether the item carries the processed status
    pub fn is_processed(&self) -> bool {
        self.status == STATUS_PROCESSED
    }
}
