//! Batch processing of every stored item
//!
//! A batch takes a snapshot of all item identifiers, schedules one task per
//! identifier on the shared [`WorkerPool`], and joins every task before
//! reporting. Task failures are values; only the join surfaces them.

mod pool;
mod processor;
mod types;


pub use pool::{PoolStats, WorkerPool};
pub use processor::{BatchHandle, BatchProcessor};
pub use types::{BatchError, BatchReport, TaskFailure, TaskOutcome};
