// Copyright (c) 2025 Hashtrie Ring Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Circular Array FIFO Queue implementation.
//!
//! A first-in first-out work list backed by a buffer allocated once at
//! construction. `front` and `back` wrap around the buffer, so every
//! operation is O(1) and the queue never reallocates.
//!
//! # Example
//!
//! ```
//! use hashtrie_ring::data_structures::{CircularArrayFifoQueue, QueueError};
//!
//! let mut queue = CircularArrayFifoQueue::new(2);
//! queue.add("a").unwrap();
//! queue.add("b").unwrap();
//! assert_eq!(queue.add("c"), Err(QueueError::Full { capacity: 2 }));
//!
//! assert_eq!(queue.next(), Ok("a"));
//! queue.add("c").unwrap();
//! assert_eq!(queue.peek_at(1), Ok(&"c"));
//! ```
//!
//! # Ordering and equality
//!
//! Two queues compare by their logical contents, front to back, regardless
//! of capacity or where the items sit in the buffer. Ordering is
//! lexicographic; on a common prefix the shorter queue orders first.

mod error;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::QueueConfig;
pub use error::{QueueError, QueueResult};

/// A fixed-capacity FIFO queue over a circular buffer.
///
/// # Type Parameters
///
/// * `E` - Type of items stored in the queue.
#[derive(Clone)]
pub struct CircularArrayFifoQueue<E> {
    /// Slots; only the `size` slots starting at `front` are live
    elements: Box<[Option<E>]>,

    /// Buffer index of the oldest item
    front: usize,

    /// Buffer index the next added item is written to
    back: usize,

    /// Number of live items
    size: usize,
}

impl<E> CircularArrayFifoQueue<E> {
    /// Creates an empty queue with room for exactly `capacity` items.
    ///
    /// A zero capacity is allowed and yields a queue that is always full.
    pub fn new(capacity: usize) -> Self {
        let elements = std::iter::repeat_with(|| None)
            .take(capacity)
            .collect::<Box<[Option<E>]>>();

        Self {
            elements,
            front: 0,
            back: 0,
            size: 0,
        }
    }

    /// Creates an empty queue sized from `config`.
    pub fn with_config(config: &QueueConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.size >= self.capacity()
    }

    /// Maps a logical offset from the front to a buffer index.
    ///
    /// Only called with a non-empty queue, so the capacity is non-zero.
    fn physical(&self, offset: usize) -> usize {
        (self.front + offset) % self.elements.len()
    }

    /// Rejects empty queues and offsets outside `[0, len)`.
    fn check_index(&self, index: usize) -> QueueResult<()> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        if index >= self.size {
            return Err(QueueError::IndexOutOfBounds {
                index,
                len: self.size,
            });
        }
        Ok(())
    }

    /// Appends `item` at the back.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The item was stored.
    /// * `Err(QueueError::Full)` - Every slot is occupied; the item is dropped.
    pub fn add(&mut self, item: E) -> QueueResult<()> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "Rejected add to full queue");
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }

        self.elements[self.back] = Some(item);
        self.back = (self.back + 1) % self.elements.len();
        self.size += 1;
        Ok(())
    }

    /// Returns the item at the front without removing it.
    pub fn peek(&self) -> QueueResult<&E> {
        self.peek_at(0)
    }

    /// Returns the item at logical offset `index` from the front.
    ///
    /// # Returns
    ///
    /// * `Err(QueueError::Empty)` - The queue holds no items.
    /// * `Err(QueueError::IndexOutOfBounds)` - `index >= len()`.
    pub fn peek_at(&self, index: usize) -> QueueResult<&E> {
        self.check_index(index)?;
        self.elements[self.physical(index)]
            .as_ref()
            .ok_or(QueueError::Empty)
    }

    /// Removes and returns the item at the front.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> QueueResult<E> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let item = self.elements[self.front].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % self.elements.len();
        self.size -= 1;
        Ok(item)
    }

    /// Replaces the item at logical offset `index`, returning the old item.
    ///
    /// Size and order are unchanged. On error the queue is left untouched.
    pub fn update(&mut self, index: usize, value: E) -> QueueResult<E> {
        self.check_index(index)?;
        let slot = self.physical(index);
        let current = self.elements[slot].as_mut().ok_or(QueueError::Empty)?;
        Ok(std::mem::replace(current, value))
    }

    /// Empties the queue by resetting its indices.
    ///
    /// Stale items stay in their slots until overwritten by later adds.
    pub fn clear(&mut self) {
        tracing::debug!(size = self.size, "Clearing circular queue");
        self.front = 0;
        self.back = 0;
        self.size = 0;
    }

    /// Iterates over the items from front to back.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}

impl<E> Default for CircularArrayFifoQueue<E> {
    /// Sized from the global queue configuration, or the built-in default.
    fn default() -> Self {
        Self::with_config(&crate::config::global_config_or_default().queue)
    }
}

/// Front-to-back iterator over a [`CircularArrayFifoQueue`].
#[derive(Debug, Clone)]
pub struct Iter<'a, E> {
    queue: &'a CircularArrayFifoQueue<E>,
    offset: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.size {
            return None;
        }
        let slot = self.queue.physical(self.offset);
        self.offset += 1;
        self.queue.elements[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.size - self.offset;
        (remaining, Some(remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a CircularArrayFifoQueue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for CircularArrayFifoQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularArrayFifoQueue")
            .field("capacity", &self.capacity())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<E: PartialEq> PartialEq for CircularArrayFifoQueue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for CircularArrayFifoQueue<E> {}

impl<E: Hash> Hash for CircularArrayFifoQueue<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<E: PartialOrd> PartialOrd for CircularArrayFifoQueue<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<E: Ord> Ord for CircularArrayFifoQueue<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}
