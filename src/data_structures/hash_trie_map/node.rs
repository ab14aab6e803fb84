// Copyright (c) 2025 Hashtrie Ring Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the hash trie map.
//!
//! Each node exclusively owns its children, keyed by the next symbol of the
//! key path, and an optional value slot for the key ending at this node.

use std::hash::{BuildHasher, Hash};

use hashbrown::HashMap;

/// A vertex of the hash trie.
#[derive(Debug, Clone)]
pub struct TrieNode<A, V, S> {
    /// Map of symbols to child nodes
    pub children: HashMap<A, TrieNode<A, V, S>, S>,

    /// Value stored for the key ending at this node
    pub value: Option<V>,
}

impl<A, V, S> TrieNode<A, V, S>
where
    A: Eq + Hash,
    S: BuildHasher + Default,
{
    /// Creates a node with no value and no children.
    pub fn new() -> Self {
        Self {
            children: HashMap::with_hasher(S::default()),
            value: None,
        }
    }

    /// A dead node has neither a value nor children and must be unlinked.
    pub fn is_dead(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl<A, V, S> TrieNode<A, V, S> {
    /// Unlinks every descendant one level at a time, so that dropping a deep
    /// subtree never recurses.
    pub fn release_children(&mut self) {
        let mut stack: Vec<TrieNode<A, V, S>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<A, V, S> Default for TrieNode<A, V, S>
where
    A: Eq + Hash,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
