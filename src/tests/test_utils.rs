//! Test utilities and fixtures for the hashtrie-ring crate.
//!
//! Shared proptest strategies for operation sequences plus a fixture for
//! tests that need configuration files or environment overrides.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Symbols are drawn from a tiny alphabet so generated keys share prefixes.
const ALPHABET_SIZE: u8 = 3;

/// Maximum number of symbols in a generated key.
const MAX_KEY_LENGTH: usize = 5;

/// Maximum number of operations in a generated sequence.
const MAX_OPERATIONS: usize = 64;

/// A single step applied to a trie map and to its reference model.
#[derive(Debug, Clone)]
pub enum TrieOp {
    /// Insert the key with the value
    Insert(Vec<u8>, i32),
    /// Delete the key
    Delete(Vec<u8>),
    /// Look the key up
    Find(Vec<u8>),
    /// Remove everything
    Clear,
}

/// A single step applied to a circular queue and to its reference model.
#[derive(Debug, Clone)]
pub enum QueueOp {
    /// Append an item
    Add(i32),
    /// Remove the front item
    Next,
    /// Read the item at a logical offset
    PeekAt(usize),
    /// Overwrite the item at a logical offset
    Update(usize, i32),
    /// Remove everything
    Clear,
}

/// Generate keys over a small alphabet, the empty key included.
pub fn key_strategy() -> BoxedStrategy<Vec<u8>> {
    proptest::collection::vec(0..ALPHABET_SIZE, 0..=MAX_KEY_LENGTH).boxed()
}

/// Generate sequences of trie operations, weighted towards mutation.
pub fn trie_ops_strategy() -> BoxedStrategy<Vec<TrieOp>> {
    let op = prop_oneof![
        4 => (key_strategy(), any::<i32>()).prop_map(|(k, v)| TrieOp::Insert(k, v)),
        3 => key_strategy().prop_map(TrieOp::Delete),
        2 => key_strategy().prop_map(TrieOp::Find),
        1 => Just(TrieOp::Clear),
    ];
    proptest::collection::vec(op, 0..MAX_OPERATIONS).boxed()
}

/// Generate sequences of queue operations with offsets that may fall
/// outside the live range.
pub fn queue_ops_strategy() -> BoxedStrategy<Vec<QueueOp>> {
    let op = prop_oneof![
        4 => any::<i32>().prop_map(QueueOp::Add),
        3 => Just(QueueOp::Next),
        2 => (0usize..8).prop_map(QueueOp::PeekAt),
        2 => (0usize..8, any::<i32>()).prop_map(|(i, v)| QueueOp::Update(i, v)),
        1 => Just(QueueOp::Clear),
    ];
    proptest::collection::vec(op, 0..MAX_OPERATIONS).boxed()
}

/// Test fixture for tests requiring configuration files.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable is removed when the fixture is dropped. Use a prefix no
    /// other test reads, tests run in parallel.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
