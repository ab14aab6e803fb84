// Copyright (c) 2025 Hashtrie Ring Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash Trie Map implementation.
//!
//! An associative map keyed by sequences of symbols. Every trie node owns a
//! hash map from the next symbol to its child plus an optional value slot, so
//! a lookup costs one hash lookup per symbol of the key.
//!
//! # Features
//!
//! - Any `Ord + Hash + Clone` symbol type; keys are any iterator of symbols.
//! - The empty key is valid and lives in the root's value slot.
//! - Prefix queries distinguish "path exists" from "key has a value".
//! - Nodes left without a value and without children are pruned eagerly.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use hashtrie_ring::data_structures::HashTrieMap;
//!
//! let mut map = HashTrieMap::new();
//! map.insert("cat".chars(), 1).unwrap();
//! map.insert("car".chars(), 2).unwrap();
//!
//! assert_eq!(map.find("cat".chars()), Some(&1));
//! assert_eq!(map.find("ca".chars()), None);
//! assert!(map.find_prefix("ca".chars()));
//!
//! map.delete("cat".chars()).unwrap();
//! assert!(map.find_prefix("ca".chars()));
//! assert_eq!(map.len(), 1);
//! ```
//!
//! # Concurrency
//!
//! The map is a plain single-threaded value. Share it across threads by
//! wrapping the whole instance in one lock.

mod error;
mod node;

use std::hash::{BuildHasher, Hash};

use fnv::FnvBuildHasher;

use crate::config::trie::MAX_DEPTH_LIMIT;
use crate::config::TrieConfig;
pub use error::{TrieMapError, TrieMapResult};
use node::TrieNode;

/// A trie-backed associative map from symbol sequences to values.
///
/// # Type Parameters
///
/// * `A` - Symbol type; one key is a sequence of symbols.
/// * `V` - Value type.
/// * `S` - Hasher used by every node's child map.
#[derive(Debug, Clone)]
pub struct HashTrieMap<A, V, S = FnvBuildHasher> {
    /// The root node; always present, holds the empty key's value
    root: TrieNode<A, V, S>,

    /// Number of present value slots in the whole tree
    size: usize,

    /// Configuration options
    config: TrieConfig,
}

impl<A, V> HashTrieMap<A, V, FnvBuildHasher>
where
    A: Ord + Hash + Clone,
{
    /// Creates an empty map.
    ///
    /// Uses the global trie configuration when one has been initialised, the
    /// built-in defaults otherwise.
    pub fn new() -> Self {
        Self::from_config(crate::config::global_config_or_default().trie)
    }

    /// Creates an empty map with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self::from_config(config)
    }
}

impl<A, V, S> HashTrieMap<A, V, S>
where
    A: Ord + Hash + Clone,
    S: BuildHasher + Default,
{
    /// Creates an empty map with the specified configuration and hasher type.
    ///
    /// A `max_depth` above [`MAX_DEPTH_LIMIT`] is capped at the limit.
    pub fn from_config(config: TrieConfig) -> Self {
        if config.max_depth > MAX_DEPTH_LIMIT {
            tracing::warn!(
                requested = config.max_depth,
                limit = MAX_DEPTH_LIMIT,
                "Capping trie max_depth"
            );
        }
        Self {
            root: TrieNode::new(),
            size: 0,
            config: config.clamped(),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Collects `key` into a symbol path, rejecting keys deeper than the
    /// configured bound.
    fn checked_path<K>(&self, key: K) -> TrieMapResult<Vec<A>>
    where
        K: IntoIterator<Item = A>,
    {
        let path: Vec<A> = key.into_iter().collect();
        if path.len() > self.config.max_depth {
            tracing::debug!(
                length = path.len(),
                max_depth = self.config.max_depth,
                "Rejected trie key exceeding maximum depth"
            );
            return Err(TrieMapError::KeyTooLong {
                length: path.len(),
                max_depth: self.config.max_depth,
            });
        }
        Ok(path)
    }

    /// Follows `key` from the root without allocating.
    fn walk<K>(&self, key: K) -> Option<&TrieNode<A, V, S>>
    where
        K: IntoIterator<Item = A>,
    {
        let mut node = &self.root;
        for symbol in key {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }

    /// Inserts a value for `key`, creating any missing nodes along its path.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(previous))` - The key already had a value, which was replaced.
    /// * `Ok(None)` - The key is new; the size grew by one.
    /// * `Err(TrieMapError::KeyTooLong)` - The key was rejected; the map is unchanged.
    pub fn insert<K>(&mut self, key: K, value: V) -> TrieMapResult<Option<V>>
    where
        K: IntoIterator<Item = A>,
    {
        let path = self.checked_path(key)?;

        let mut node = &mut self.root;
        for symbol in path {
            node = node.children.entry(symbol).or_default();
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.size += 1;
        }
        Ok(previous)
    }

    /// Returns the value stored for `key`, if any.
    pub fn find<K>(&self, key: K) -> Option<&V>
    where
        K: IntoIterator<Item = A>,
    {
        self.walk(key)?.value.as_ref()
    }

    /// Returns a mutable reference to the value stored for `key`, if any.
    pub fn find_mut<K>(&mut self, key: K) -> Option<&mut V>
    where
        K: IntoIterator<Item = A>,
    {
        let mut node = &mut self.root;
        for symbol in key {
            node = node.children.get_mut(&symbol)?;
        }
        node.value.as_mut()
    }

    /// Returns `true` if every symbol of `key` has a transition from the root,
    /// whether or not a value is stored at the end of the path.
    pub fn find_prefix<K>(&self, key: K) -> bool
    where
        K: IntoIterator<Item = A>,
    {
        self.walk(key).is_some()
    }

    /// Removes the value stored for `key` and prunes nodes left dead.
    ///
    /// Deleting a key that holds no value is a no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The removed value.
    /// * `Ok(None)` - The key held no value.
    /// * `Err(TrieMapError::KeyTooLong)` - The key was rejected; the map is unchanged.
    pub fn delete<K>(&mut self, key: K) -> TrieMapResult<Option<V>>
    where
        K: IntoIterator<Item = A>,
    {
        let path = self.checked_path(key)?;
        let removed = Self::delete_path(&mut self.root, &path, 0);
        if removed.is_some() {
            self.size -= 1;
        }
        Ok(removed)
    }

    /// Recursive part of [`delete`](Self::delete); `max_depth` bounds the
    /// recursion.
    ///
    /// The caller owns `node`, so only children are ever unlinked here and the
    /// root survives regardless of its state.
    fn delete_path(node: &mut TrieNode<A, V, S>, path: &[A], depth: usize) -> Option<V> {
        let (symbol, rest) = match path.split_first() {
            Some(split) => split,
            None => return node.value.take(),
        };

        let child = node.children.get_mut(symbol)?;
        let removed = Self::delete_path(child, rest, depth + 1);

        if child.is_dead() {
            node.children.remove(symbol);
            tracing::trace!(depth = depth + 1, "Pruned dead trie node");
        }

        removed
    }

    /// Removes every key, replacing the root with a fresh node.
    pub fn clear(&mut self) {
        tracing::debug!(size = self.size, "Clearing hash trie map");
        self.root.release_children();
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Returns the number of keys holding a value.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_len()
    }

    /// Returns every key and its value, ordered by symbol sequence.
    pub fn entries(&self) -> Vec<(Vec<A>, &V)> {
        let mut result = Vec::with_capacity(self.size);
        let mut path = Vec::new();
        Self::collect_entries(&self.root, &mut path, &mut result);
        result
    }

    /// Returns every key starting with `prefix` and its value, ordered by
    /// symbol sequence.
    pub fn entries_with_prefix<K>(&self, prefix: K) -> Vec<(Vec<A>, &V)>
    where
        K: IntoIterator<Item = A>,
    {
        let mut path = Vec::new();
        let mut node = &self.root;
        for symbol in prefix {
            node = match node.children.get(&symbol) {
                Some(child) => child,
                None => return Vec::new(),
            };
            path.push(symbol);
        }

        let mut result = Vec::new();
        Self::collect_entries(node, &mut path, &mut result);
        result
    }

    /// Depth-first collection visiting a node's own value before its children,
    /// children in ascending symbol order.
    fn collect_entries<'a>(
        start: &'a TrieNode<A, V, S>,
        path: &mut Vec<A>,
        result: &mut Vec<(Vec<A>, &'a V)>,
    ) {
        let base = path.len();
        // (node, symbol leading to it, depth below `start`)
        let mut stack = vec![(start, None, 0usize)];

        while let Some((node, symbol, depth)) = stack.pop() {
            path.truncate(base + depth.saturating_sub(1));
            if let Some(symbol) = symbol {
                path.push(A::clone(symbol));
            }
            if let Some(value) = &node.value {
                result.push((path.clone(), value));
            }

            let mut children: Vec<_> = node.children.iter().collect();
            // Descending, so the smallest symbol is popped first
            children.sort_unstable_by(|(a, _), (b, _)| b.cmp(a));
            stack.extend(
                children
                    .into_iter()
                    .map(|(symbol, child)| (child, Some(symbol), depth + 1)),
            );
        }
    }
}

impl<A, V, S> Drop for HashTrieMap<A, V, S> {
    fn drop(&mut self) {
        self.root.release_children();
    }
}

impl<A, V> Default for HashTrieMap<A, V, FnvBuildHasher>
where
    A: Ord + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
