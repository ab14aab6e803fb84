//! Data structures provided by the crate.
//!
//! Both structures are single-threaded values with no interior mutability;
//! callers needing shared access wrap an instance in a lock of their choice.

pub mod circular_fifo_queue;
pub mod hash_trie_map;

// Re-export common data structures
pub use circular_fifo_queue::{CircularArrayFifoQueue, QueueError, QueueResult};
pub use hash_trie_map::{HashTrieMap, TrieMapError, TrieMapResult};
