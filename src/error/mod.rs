//! Error module for the hashtrie-ring crate.
//!
//! Each data structure owns a narrow error enum next to its implementation;
//! this module ties them together with configuration and IO failures so that
//! callers mixing several components can propagate with a single `?`.

use thiserror::Error;

use crate::data_structures::circular_fifo_queue::QueueError;
use crate::data_structures::hash_trie_map::TrieMapError;

pub mod config;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by [`HashTrieMap`](crate::data_structures::HashTrieMap) operations.
    #[error("Trie map error: {0}")]
    TrieMap(#[from] TrieMapError),

    /// Errors raised by [`CircularArrayFifoQueue`](crate::data_structures::CircularArrayFifoQueue) operations.
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    /// IO errors that may occur while writing configuration files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure to install the global tracing subscriber.
    #[error("Logging initialisation failed: {0}")]
    Logging(String),
}
