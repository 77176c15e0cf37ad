//! Batch processor: fans one task per stored item onto the worker pool

use super::pool::WorkerPool;
use super::types::{BatchError, BatchReport, TaskFailure, TaskOutcome};
use crate::config::BatchConfig;
use crate::core::models::{Item, ItemId};
use crate::storage::ItemStore;
use futures::future::join_all;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Span, debug, debug_span, info, info_span, warn};
use uuid::Uuid;

/// Processes every stored item and reports the complete result set
pub struct BatchProcessor {
    store: Arc<dyn ItemStore>,
    pool: Arc<WorkerPool>,
    processing_delay: Duration,
    total_processed: Arc<AtomicU64>,
}

impl BatchProcessor {
    /// Create a new batch processor
    pub fn new(store: Arc<dyn ItemStore>, pool: Arc<WorkerPool>, processing_delay: Duration) -> Self {
        Self {
            store,
            pool,
            processing_delay,
            total_processed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a batch processor using the configured processing delay
    pub fn from_config(store: Arc<dyn ItemStore>, pool: Arc<WorkerPool>, config: &BatchConfig) -> Self {
        Self::new(store, pool, config.processing_delay())
    }

    /// Shared worker pool
    pub fn pool(&self) -> &Arc<WorkerPool> {
        &self.pool
    }

    /// Delay incurred by each task
    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Items processed by every batch since startup
    pub fn total_processed(&self) -> u64 {
        self.total_processed.load(Ordering::Relaxed)
    }

    /// Process all items, failing if any task fails
    pub async fn process_all(&self) -> Result<Vec<Item>, BatchError> {
        self.start().await?.join().await
    }

    /// Process all items and report successes and failures separately
    pub async fn process_all_report(&self) -> Result<BatchReport, BatchError> {
        Ok(self.start().await?.join_report().await)
    }

    /// Take the identifier snapshot and schedule one task per identifier.
    ///
    /// Returns once every task is submitted; the returned handle resolves when
    /// all of them are terminal.
    pub async fn start(&self) -> Result<BatchHandle, BatchError> {
        let batch_id = Uuid::new_v4();
        let span = info_span!("batch", %batch_id);

        let ids = self
            .store
            .find_all_ids()
            .instrument(span.clone())
            .await
            .map_err(|e| BatchError::Snapshot(e.to_string()))?;

        let processed = Arc::new(AtomicUsize::new(0));
        let mut tasks = Vec::with_capacity(ids.len());

        let submitted = span.in_scope(|| {
            info!(total = ids.len(), "Starting batch");

            for &id in &ids {
                let step = ProcessingStep {
                    store: Arc::clone(&self.store),
                    delay: self.processing_delay,
                    processed: Arc::clone(&processed),
                    total_processed: Arc::clone(&self.total_processed),
                };
                let task_span = debug_span!("task", item_id = id);

                tasks.push(
                    self.pool
                        .submit(id, move |cancel| step.run(id, cancel).instrument(task_span))?,
                );
            }
            Ok::<_, BatchError>(())
        });

        if let Err(e) = submitted {
            // The pool closed mid-submission; wait for the accepted tasks so
            // none of them outlives the failed batch
            warn!(accepted = tasks.len(), total = ids.len(), "Batch rejected by worker pool");
            join_all(tasks).instrument(span).await;
            return Err(e);
        }

        Ok(BatchHandle {
            batch_id,
            ids,
            tasks,
            processed,
            span,
        })
    }
}

/// Everything one task needs, detached from the processor
struct ProcessingStep {
    store: Arc<dyn ItemStore>,
    delay: Duration,
    processed: Arc<AtomicUsize>,
    total_processed: Arc<AtomicU64>,
}

impl ProcessingStep {
    async fn run(self, id: ItemId, cancel: CancellationToken) -> TaskOutcome {
        let mut item = match self.store.find_by_id(id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                warn!(item_id = id, "Item disappeared before processing");
                return TaskOutcome::Failed(TaskFailure::NotFound { id });
            }
            Err(e) => {
                return TaskOutcome::Failed(TaskFailure::Storage {
                    id,
                    message: e.to_string(),
                });
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!(item_id = id, "Processing interrupted");
                return TaskOutcome::Failed(TaskFailure::Interrupted { id });
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        item.mark_processed();

        let saved = match self.store.save(item).await {
            Ok(saved) => saved,
            Err(e) => {
                return TaskOutcome::Failed(TaskFailure::Storage {
                    id,
                    message: e.to_string(),
                });
            }
        };

        self.processed.fetch_add(1, Ordering::SeqCst);
        self.total_processed.fetch_add(1, Ordering::Relaxed);
        debug!(item_id = id, "Item processed");

        TaskOutcome::Completed(saved)
    }
}

/// An in-flight batch
pub struct BatchHandle {
    batch_id: Uuid,
    ids: Vec<ItemId>,
    tasks: Vec<JoinHandle<TaskOutcome>>,
    processed: Arc<AtomicUsize>,
    span: Span,
}

impl std::fmt::Debug for BatchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchHandle")
            .field("batch_id", &self.batch_id)
            .field("total", &self.ids.len())
            .field("processed", &self.processed_so_far())
            .finish()
    }
}

impl BatchHandle {
    /// Batch identifier
    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }

    /// Identifiers in submission order
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Number of scheduled tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the snapshot was empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks completed so far
    pub fn processed_so_far(&self) -> usize {
        self.processed.load(Ordering::SeqCst)
    }

    /// Wait for every task and fail if any of them failed
    pub async fn join(self) -> Result<Vec<Item>, BatchError> {
        self.join_report().await.into_result()
    }

    /// Wait for every task and report all outcomes in submission order
    pub async fn join_report(self) -> BatchReport {
        let Self {
            batch_id,
            ids,
            tasks,
            processed,
            span,
        } = self;

        if tasks.is_empty() {
            span.in_scope(|| info!("No items to process"));
            return BatchReport::empty(batch_id);
        }

        async move {
            let total = ids.len();
            let joined = join_all(tasks).await;

            let mut items = Vec::with_capacity(total);
            let mut failed = Vec::new();

            for (id, result) in ids.into_iter().zip(joined) {
                match result {
                    Ok(TaskOutcome::Completed(item)) => items.push(item),
                    Ok(TaskOutcome::Failed(failure)) => failed.push(failure),
                    Err(e) if e.is_panic() => failed.push(TaskFailure::Panicked { id }),
                    Err(_) => failed.push(TaskFailure::Interrupted { id }),
                }
            }

            let processed_count = processed.load(Ordering::SeqCst);

            match failed.first() {
                None => info!(total, processed = processed_count, "Batch completed"),
                Some(first) => warn!(
                    total,
                    processed = processed_count,
                    failed = failed.len(),
                    first = %first,
                    "Batch finished with failures"
                ),
            }

            BatchReport {
                batch_id,
                total,
                processed_count,
                processed: items,
                failed,
            }
        }
        .instrument(span)
        .await
    }
}
