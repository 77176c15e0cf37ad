//! # items-rs
//!
//! A small item record service with an asynchronous batch processor.
//!
//! Items are stored behind the [`storage::ItemStore`] trait, either in memory
//! or in a SeaORM database. Besides CRUD, the service can process every stored
//! item at once: the [`core::batch::BatchProcessor`] snapshots all item
//! identifiers, runs one task per identifier on a bounded
//! [`core::batch::WorkerPool`], and reports either the full list of processed
//! items or an aggregated failure.
//!
//! ## Processing items
//!
//! ```rust,no_run
//! use items_rs::core::batch::{BatchProcessor, WorkerPool};
//! use items_rs::core::models::Item;
//! use items_rs::storage::{InMemoryItemStore, ItemStore};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryItemStore::new());
//!     store.save(Item::new("Widget", "A widget", "NEW", "ops@example.com")).await?;
//!
//!     let pool = Arc::new(WorkerPool::new(4));
//!     let processor = BatchProcessor::new(store, Arc::clone(&pool), Duration::from_millis(10));
//!
//!     let processed = processor.process_all().await?;
//!     assert!(processed.iter().all(Item::is_processed));
//!
//!     pool.shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use items_rs::server::builder::run_server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run_server("config/items.yaml").await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::ItemService;
pub use core::batch::{BatchError, BatchProcessor, BatchReport, TaskFailure, WorkerPool};
pub use core::models::Item;
pub use storage::{ItemStore, StorageLayer};
pub use utils::error::{Result, ServiceError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
    /// Cargo profile (`debug` or `release`)
    pub profile: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            profile: env!("BUILD_PROFILE"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Metadata captured when the crate was compiled
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
