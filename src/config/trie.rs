//! Trie map configuration module.
//!
//! Limits applied by [`HashTrieMap`](crate::data_structures::HashTrieMap) to
//! the keys it accepts.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default bound on the number of symbols in a key.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Largest accepted `max_depth`; delete recurses once per key symbol.
pub const MAX_DEPTH_LIMIT: usize = 4096;

/// Trie map configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Maximum number of symbols in a key (bounds the recursive delete)
    pub max_depth: usize,
}

impl TrieConfig {
    /// Creates a configuration with the given depth bound.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns this configuration with `max_depth` capped at [`MAX_DEPTH_LIMIT`].
    pub fn clamped(self) -> Self {
        Self {
            max_depth: self.max_depth.min(MAX_DEPTH_LIMIT),
        }
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_depth".to_string(),
                message: format!("must not exceed {MAX_DEPTH_LIMIT}"),
            });
        }
        Ok(())
    }
}
