//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod batch;
pub mod logging;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use batch::*;
pub use logging::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default database URL (in-memory SQLite)
pub fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

/// Default number of batch workers
pub fn default_pool_size() -> usize {
    10
}

/// Default per-item processing delay in milliseconds
pub fn default_processing_delay_ms() -> u64 {
    100
}

pub fn default_log_level() -> String {
    "info".to_string()
}
