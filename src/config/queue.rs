//! Queue configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Capacity used when a queue is built from the default configuration.
pub const DEFAULT_CAPACITY: usize = 16;

/// Circular FIFO queue configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Fixed number of slots allocated for the queue
    pub capacity: usize,
}

impl QueueConfig {
    /// Creates a configuration with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Validate for QueueConfig {
    fn validate(&self) -> ConfigResult<()> {
        // A zero-slot queue is constructible but useless as configuration
        if self.capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "queue.capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
