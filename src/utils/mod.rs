//! Utility modules for the item service
//!
//! - **error**: crate-wide error type and HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup

pub use error::{Result, ServiceError};
pub use logging::init_logging;
