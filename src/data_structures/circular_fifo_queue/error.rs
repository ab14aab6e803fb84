// Copyright (c) 2025 Hashtrie Ring Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the circular FIFO queue.

/// Errors that can occur in [`CircularArrayFifoQueue`](super::CircularArrayFifoQueue) operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum QueueError {
    /// Every slot is occupied
    #[error("Queue is at capacity ({capacity} items)")]
    Full {
        /// The fixed capacity of the queue
        capacity: usize,
    },

    /// The queue holds no items
    #[error("Queue is empty")]
    Empty,

    /// A logical offset outside `[0, len)`
    #[error("Index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds {
        /// The requested logical offset
        index: usize,
        /// The number of items in the queue
        len: usize,
    },
}

/// Result type for circular FIFO queue operations
pub type QueueResult<T> = Result<T, QueueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueueError::Full { capacity: 3 }.to_string(),
            "Queue is at capacity (3 items)"
        );
        assert_eq!(QueueError::Empty.to_string(), "Queue is empty");
        assert_eq!(
            QueueError::IndexOutOfBounds { index: 5, len: 2 }.to_string(),
            "Index 5 out of bounds for queue of length 2"
        );
    }
}
