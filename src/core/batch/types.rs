//! Types for batch processing

use crate::core::models::{Item, ItemId};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Terminal failure of a single processing task
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskFailure {
    /// The identifier was in the snapshot but the item was gone at fetch time
    #[error("Item not found: {id}")]
    NotFound {
        /// Item identifier
        id: ItemId,
    },

    /// The task was cancelled while queued or waiting in its processing delay
    #[error("Processing interrupted for item {id}")]
    Interrupted {
        /// Item identifier
        id: ItemId,
    },

    /// The storage collaborator returned an error
    #[error("Storage error while processing item {id}: {message}")]
    Storage {
        /// Item identifier
        id: ItemId,
        /// Storage error message
        message: String,
    },

    /// The worker panicked
    #[error("Worker panicked while processing item {id}")]
    Panicked {
        /// Item identifier
        id: ItemId,
    },
}

impl TaskFailure {
    /// Identifier of the item the task was processing
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::NotFound { id }
            | Self::Interrupted { id }
            | Self::Storage { id, .. }
            | Self::Panicked { id } => *id,
        }
    }

    /// Whether the failure was caused by cancellation
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}

/// Terminal state of a processing task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The item was processed and saved
    Completed(Item),
    /// The task failed
    Failed(TaskFailure),
}

impl TaskOutcome {
    /// Whether the task completed
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Batch-level errors
#[derive(Error, Debug, Clone)]
pub enum BatchError {
    /// The identifier snapshot could not be taken
    #[error("Failed to read item identifiers: {0}")]
    Snapshot(String),

    /// The worker pool no longer accepts tasks
    #[error("Worker pool is shut down")]
    PoolShutdown,

    /// One or more tasks failed
    #[error("Batch {batch_id} failed: {first} ({} of {total} tasks failed)", .failures.len())]
    Aggregate {
        /// Batch identifier
        batch_id: Uuid,
        /// First failure in submission order
        first: TaskFailure,
        /// Every failure in submission order
        failures: Vec<TaskFailure>,
        /// Number of tasks that completed
        succeeded: usize,
        /// Number of tasks scheduled
        total: usize,
    },
}

/// Full outcome of a batch, with successes and failures reported separately
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Batch identifier
    pub batch_id: Uuid,
    /// Number of tasks scheduled
    pub total: usize,
    /// Value of the batch's processed counter once every task was terminal
    pub processed_count: usize,
    /// Saved items in submission order
    pub processed: Vec<Item>,
    /// Failures in submission order
    pub failed: Vec<TaskFailure>,
}

impl BatchReport {
    pub(crate) fn empty(batch_id: Uuid) -> Self {
        Self {
            batch_id,
            total: 0,
            processed_count: 0,
            processed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Whether every task completed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Collapse into the all-or-nothing result
    pub fn into_result(self) -> Result<Vec<Item>, BatchError> {
        let Some(first) = self.failed.first().cloned() else {
            return Ok(self.processed);
        };

        Err(BatchError::Aggregate {
            batch_id: self.batch_id,
            first,
            succeeded: self.processed.len(),
            total: self.total,
            failures: self.failed,
        })
    }
}
