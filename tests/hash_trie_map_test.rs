// Copyright (c) 2025 Hashtrie Ring Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the hash trie map through the public API.

use std::sync::{Arc, Mutex};
use std::thread;

use hashtrie_ring::config::TrieConfig;
use hashtrie_ring::data_structures::{HashTrieMap, TrieMapError};
use hashtrie_ring::error::Error;

#[test]
fn test_insert_find_delete_cycle() {
    let mut map = HashTrieMap::with_config(TrieConfig::default());
    let words = ["tea", "ten", "to", "inn", "in", "i"];
    for (i, word) in words.iter().enumerate() {
        assert_eq!(map.insert(word.chars(), i).unwrap(), None);
    }
    assert_eq!(map.len(), words.len());

    for (i, word) in words.iter().enumerate() {
        assert_eq!(map.find(word.chars()), Some(&i));
    }
    assert!(map.find_prefix("te".chars()));
    assert_eq!(map.find("te".chars()), None);

    for word in words {
        map.delete(word.chars()).unwrap();
        assert_eq!(map.find(word.chars()), None);
    }
    assert!(map.is_empty());
    assert_eq!(map.node_count(), 1);
    assert!(!map.find_prefix("t".chars()));
}

#[test]
fn test_overwrite_then_delete_leaves_sibling() {
    let mut map = HashTrieMap::with_config(TrieConfig::default());
    map.insert("in".chars(), 1).unwrap();
    map.insert("inn".chars(), 2).unwrap();
    assert_eq!(map.insert("in".chars(), 3).unwrap(), Some(1));
    assert_eq!(map.len(), 2);

    assert_eq!(map.delete("in".chars()).unwrap(), Some(3));
    assert!(map.find_prefix("in".chars()));
    assert_eq!(map.find("inn".chars()), Some(&2));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_key_limit_error_is_typed() {
    let mut map = HashTrieMap::with_config(TrieConfig::with_max_depth(2));
    let result: Result<_, Error> = map.insert("abc".chars(), 1).map_err(Error::from);
    assert!(matches!(
        result,
        Err(Error::TrieMap(TrieMapError::KeyTooLong { length: 3, .. }))
    ));
    assert!(map.is_empty());
}

/// The map is not synchronised itself; one lock around the instance is enough.
#[test]
fn test_shared_behind_a_lock() {
    const THREAD_COUNT: usize = 4;
    const KEYS_PER_THREAD: usize = 50;

    let map = Arc::new(Mutex::new(HashTrieMap::<char, usize>::with_config(
        TrieConfig::default(),
    )));
    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for j in 0..KEYS_PER_THREAD {
                    let key = format!("key_{thread_id}_{j}");
                    map.lock().unwrap().insert(key.chars(), j).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let map = map.lock().unwrap();
    assert_eq!(map.len(), THREAD_COUNT * KEYS_PER_THREAD);
    assert_eq!(map.entries_with_prefix("key_0_".chars()).len(), KEYS_PER_THREAD);
}
