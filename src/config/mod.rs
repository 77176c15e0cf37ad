//! Configuration management for the item service
//!
//! This module handles loading, validation, and merging of the service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::debug;

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let service: ServiceConfig = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let service = ServiceConfig::from_env()?;
        let config = Self { service };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get batch configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.service.batch
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.service
            .storage
            .validate()
            .map_err(|e| ServiceError::Config(format!("Storage config error: {}", e)))?;

        self.service
            .batch
            .validate()
            .map_err(|e| ServiceError::Config(format!("Batch config error: {}", e)))?;

        self.service
            .logging
            .validate()
            .map_err(|e| ServiceError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.service = self.service.merge(other.service);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
