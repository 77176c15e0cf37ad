//! Main service configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Batch processing configuration
    #[serde(default)]
    pub batch: BatchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Build configuration from `ITEMS_*` environment variables on top of defaults
    pub fn from_env() -> crate::utils::error::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> crate::utils::error::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("ITEMS_HOST") {
            config.server.host = host;
        }
        if let Some(port) = parse_var(&lookup, "ITEMS_PORT")? {
            config.server.port = port;
        }
        if let Some(workers) = parse_var(&lookup, "ITEMS_WORKERS")? {
            config.server.workers = Some(workers);
        }
        if let Some(url) = lookup("ITEMS_DATABASE_URL") {
            config.storage.database.url = url;
            config.storage.database.enabled = true;
        }
        if let Some(pool_size) = parse_var(&lookup, "ITEMS_POOL_SIZE")? {
            config.batch.pool_size = pool_size;
        }
        if let Some(delay) = parse_var(&lookup, "ITEMS_PROCESSING_DELAY_MS")? {
            config.batch.processing_delay_ms = delay;
        }
        if let Some(level) = lookup("ITEMS_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("ITEMS_LOG_FORMAT") {
            config.logging.format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                other => {
                    return Err(crate::utils::error::ServiceError::Config(format!(
                        "Invalid ITEMS_LOG_FORMAT: {}",
                        other
                    )));
                }
            };
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.storage = self.storage.merge(other.storage);
        self.batch = self.batch.merge(other.batch);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> crate::utils::error::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            crate::utils::error::ServiceError::Config(format!("Invalid {}: {}", key, e))
        }),
        None => Ok(None),
    }
}
