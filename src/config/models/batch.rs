//! Batch processing configuration

use super::*;
use crate::config::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for the per-item processing delay
const MAX_PROCESSING_DELAY_MS: u64 = 60_000;

/// Batch processor and worker pool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchConfig {
    /// Fixed number of concurrent processing slots shared by all batches
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Delay incurred by every processing task, in milliseconds
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

impl BatchConfig {
    /// Set pool size
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set processing delay
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Processing delay as a [`Duration`]
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Merge batch configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.pool_size != default_pool_size() {
            self.pool_size = other.pool_size;
        }
        if other.processing_delay_ms != default_processing_delay_ms() {
            self.processing_delay_ms = other.processing_delay_ms;
        }
        self
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pool_size == 0 {
            return Err("Batch pool_size must be greater than 0".to_string());
        }

        if self.processing_delay_ms > MAX_PROCESSING_DELAY_MS {
            return Err(format!(
                "Batch processing_delay_ms cannot exceed {}",
                MAX_PROCESSING_DELAY_MS
            ));
        }

        Ok(())
    }
}
