// Copyright (c) 2025 Hashtrie Ring Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the hash trie map.

/// Errors that can occur in [`HashTrieMap`](super::HashTrieMap) operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieMapError {
    /// The key has more symbols than the configured maximum depth.
    #[error("Key of {length} symbols exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// Number of symbols in the rejected key.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

/// Result type for hash trie map operations.
pub type TrieMapResult<T> = Result<T, TrieMapError>;
