//! Fixed-Size Circular Buffer for Reading History
//!
//! ## Overview
//!
//! Every box keeps the most recent readings for trend display. The window is
//! fixed: once full, each new reading evicts the oldest one. Capacity is a
//! const generic, so the storage is an inline array and a push never allocates.
//!
//! ### Why a Circular Buffer?
//!
//! Appending to a list and truncating afterwards shifts every element on every
//! tick. A ring only moves the write position:
//! - O(1) insertion (overwrites oldest when full)
//! - O(1) access to most recent reading
//! - O(n) iteration, oldest to newest
//!
//! ### Memory Layout
//!
//! ```text
//! CircularBuffer<Reading, 5> after 7 pushes (r0..r6):
//! ┌────┬────┬────┬────┬────┐
//! │ r5 │ r6 │ r2 │ r3 │ r4 │  ← physical slots
//! └────┴────┴────┴────┴────┘
//!             ↑
//!             write_pos = 2 (also the oldest entry once full)
//!
//! Logical view: [r2, r3, r4, r5, r6]
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use coldchain_core::buffer::CircularBuffer;
//! use coldchain_core::Reading;
//!
//! let mut history: CircularBuffer<Reading, 3> = CircularBuffer::new();
//!
//! for t in 0..5u64 {
//!     history.push(Reading { timestamp: t, temperature: 4.0, humidity: 45.0, shock: false });
//! }
//!
//! let stamps: Vec<u64> = history.iter().map(|r| r.timestamp).collect();
//! assert_eq!(stamps, vec![2, 3, 4]);
//! ```

use core::fmt;

use serde::{Serialize, Serializer};

/// Fixed-size circular buffer for time-ordered samples
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - Iteration yields items in insertion order
#[derive(Clone)]
pub struct CircularBuffer<T: Copy, const N: usize> {
    /// Option instead of MaybeUninit keeps this free of unsafe code
    data: [Option<T>; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid items
    len: usize,
}

impl<T: Copy, const N: usize> CircularBuffer<T, N> {
    /// Creates a new empty circular buffer
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds an item, overwriting the oldest one when full
    pub fn push(&mut self, item: T) {
        self.data[self.write_pos] = Some(item);
        self.write_pos = (self.write_pos + 1) % N;

        if !self.is_full() {
            self.len += 1;
        }
    }

    /// Get number of stored items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Get the most recent item
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // Most recent is one before write position
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };

        self.data[idx].as_ref()
    }

    /// Iterate over items from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, T, N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Gets an item by its logical index (0 = oldest, len-1 = newest)
    ///
    /// Until the buffer fills, logical and physical indices match. Once full,
    /// the oldest item sits at `write_pos`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.is_full() {
            (self.write_pos + index) % N
        } else {
            index
        };

        self.data[actual_index].as_ref()
    }
}

/// Iterator over circular buffer contents
pub struct CircularBufferIter<'a, T: Copy, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
    index: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for CircularBufferIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, T: Copy, const N: usize> ExactSizeIterator for CircularBufferIter<'a, T, N> {}

impl<T: Copy, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for CircularBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for CircularBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Serialized as a plain sequence, oldest first
impl<T: Copy + Serialize, const N: usize> Serialize for CircularBuffer<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn empty_buffer() {
        let buffer: CircularBuffer<u32, 5> = CircularBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.last().is_none());
        assert!(!buffer.is_full());
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = CircularBuffer::<f32, 5>::new();

        buffer.push(25.0);
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.last(), Some(&25.0));
    }

    #[test]
    fn circular_overwrite() {
        let mut buffer = CircularBuffer::<u32, 3>::new();

        for i in 0..5 {
            buffer.push(i);
        }

        // Should only have 3 items, 0 and 1 were overwritten
        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());

        let values: Vec<u32> = buffer.iter().copied().collect();
        assert_eq!(values, vec![2, 3, 4]);
        assert_eq!(buffer.last(), Some(&4));
        assert_eq!(buffer.get(0), Some(&2));
        assert_eq!(buffer.get(3), None);
    }

    #[test]
    fn equality_ignores_physical_layout() {
        let mut wrapped = CircularBuffer::<u32, 3>::new();
        for i in 0..5 {
            wrapped.push(i);
        }

        let mut fresh = CircularBuffer::<u32, 3>::new();
        for i in 2..5 {
            fresh.push(i);
        }

        assert_eq!(wrapped, fresh);
    }
}
