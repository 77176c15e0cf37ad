//! Logging setup
//!
//! Installs the global `tracing` subscriber according to [`LoggingConfig`].

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{Result, ServiceError};
use tracing_subscriber::EnvFilter;

/// Build the env filter. `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// Fails if a subscriber was already installed, which only happens when the
/// server is embedded into a host that configured tracing itself.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.with_target)
        .with_thread_ids(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.map_err(|e| ServiceError::Config(format!("Failed to initialize logging: {}", e)))
}
