//! Bounded worker pool shared by every batch
//!
//! The pool is an owned resource: it is built once at startup, handed to the
//! processor by reference, and shut down explicitly when the server exits.
//! Tasks are tokio tasks gated by a semaphore holding `size` permits, so at
//! most `size` tasks run their processing step at any moment regardless of how
//! many batches are in flight.

use super::types::{BatchError, TaskFailure, TaskOutcome};
use crate::config::BatchConfig;
use crate::core::models::ItemId;
use futures::FutureExt;
use serde::Serialize;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

/// Snapshot of the pool's lifetime counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Configured number of concurrent slots
    pub size: usize,
    /// Slots free right now
    pub available: usize,
    /// Tasks accepted since startup
    pub submitted: u64,
    /// Tasks currently holding a slot
    pub running: u64,
    /// Tasks that completed
    pub completed: u64,
    /// Tasks that failed, interruptions included
    pub failed: u64,
    /// Tasks that failed because they were interrupted
    pub interrupted: u64,
}

#[derive(Debug, Default)]
struct PoolCounters {
    submitted: AtomicU64,
    running: AtomicU64,
    completed: AtomicU64,
    failed: AtomicU64,
    interrupted: AtomicU64,
}

impl PoolCounters {
    fn record(&self, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Completed(_) => {
                self.completed.fetch_add(1, Ordering::Relaxed);
            }
            TaskOutcome::Failed(failure) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                if failure.is_interrupted() {
                    self.interrupted.fetch_add(1, Ordering::Relaxed);
                }
            }
        }
    }
}

struct RunningGuard(Arc<PoolCounters>);

impl RunningGuard {
    fn enter(counters: &Arc<PoolCounters>) -> Self {
        counters.running.fetch_add(1, Ordering::Relaxed);
        Self(Arc::clone(counters))
    }
}

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.running.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Fixed-size pool of processing slots
#[derive(Debug)]
pub struct WorkerPool {
    size: usize,
    permits: Arc<Semaphore>,
    tracker: TaskTracker,
    shutdown: CancellationToken,
    closed: AtomicBool,
    counters: Arc<PoolCounters>,
}

impl WorkerPool {
    /// Create a pool with `size` slots (at least one)
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        debug!(size, "Creating worker pool");

        Self {
            size,
            permits: Arc::new(Semaphore::new(size)),
            tracker: TaskTracker::new(),
            shutdown: CancellationToken::new(),
            closed: AtomicBool::new(false),
            counters: Arc::new(PoolCounters::default()),
        }
    }

    /// Create a pool sized from configuration
    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(config.pool_size)
    }

    /// Number of concurrent slots
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `shutdown` has been called
    pub fn is_shut_down(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Current counters
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            size: self.size,
            available: self.permits.available_permits(),
            submitted: self.counters.submitted.load(Ordering::Relaxed),
            running: self.counters.running.load(Ordering::Relaxed),
            completed: self.counters.completed.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            interrupted: self.counters.interrupted.load(Ordering::Relaxed),
        }
    }

    /// Schedule one task for item `id`.
    ///
    /// The task waits for a free slot, then runs `task` with a token that is
    /// cancelled when the pool shuts down. A task cancelled before it gets a
    /// slot fails with [`TaskFailure::Interrupted`]; a panicking task fails
    /// with [`TaskFailure::Panicked`]. The handle always resolves to a
    /// terminal outcome unless the runtime itself aborts the task.
    pub fn submit<F, Fut>(&self, id: ItemId, task: F) -> Result<JoinHandle<TaskOutcome>, BatchError>
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = TaskOutcome> + Send + 'static,
    {
        if self.is_shut_down() {
            return Err(BatchError::PoolShutdown);
        }

        self.counters.submitted.fetch_add(1, Ordering::Relaxed);

        let permits = Arc::clone(&self.permits);
        let counters = Arc::clone(&self.counters);
        let token = self.shutdown.child_token();

        Ok(self.tracker.spawn(async move {
            let permit = tokio::select! {
                biased;
                _ = token.cancelled() => None,
                permit = permits.acquire_owned() => permit.ok(),
            };

            let Some(_permit) = permit else {
                debug!(item_id = id, "Task interrupted before it was scheduled");
                let outcome = TaskOutcome::Failed(TaskFailure::Interrupted { id });
                counters.record(&outcome);
                return outcome;
            };

            let _running = RunningGuard::enter(&counters);
            let outcome = match AssertUnwindSafe(async move { task(token).await })
                .catch_unwind()
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => {
                    error!(item_id = id, "Worker panicked");
                    TaskOutcome::Failed(TaskFailure::Panicked { id })
                }
            };

            counters.record(&outcome);
            outcome
        }))
    }

    /// Stop accepting tasks, interrupt in-flight ones, and wait for them to
    /// reach a terminal state. Calling it again is a no-op.
    pub async fn shutdown(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            debug!("Worker pool already shut down");
            return;
        }

        info!(running = self.tracker.len(), "Shutting down worker pool");

        self.shutdown.cancel();
        self.permits.close();
        self.tracker.close();
        self.tracker.wait().await;

        let stats = self.stats();
        info!(
            completed = stats.completed,
            failed = stats.failed,
            interrupted = stats.interrupted,
            "Worker pool shut down"
        );
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::from_config(&BatchConfig::default())
    }
}
