//! Min-priority queue used as the A* frontier.
//!
//! Items are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are removed first; ties are broken by insertion order
//! (FIFO).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{EmptyError, Result};

#[derive(Debug, Clone)]
struct Entry<P, T> {
    priority: P,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
    item: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap, so this is the natural
        // order: smaller priority first, then earlier insertion.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with FIFO tie-breaking.
///
/// Duplicate priorities and duplicate items are both allowed.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = u32> {
    heap: BinaryHeap<Reverse<Entry<P, T>>>,
    seq: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn insert(&mut self, priority: P, item: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove the item with the smallest priority (ties broken FIFO).
    pub fn remove_min(&mut self) -> Result<T> {
        self.remove_min_with_priority().map(|(_, item)| item)
    }

    /// Remove the item with the smallest priority, also returning the
    /// priority.
    pub fn remove_min_with_priority(&mut self) -> Result<(P, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.item))
            .ok_or(EmptyError::PriorityQueue)
    }

    /// The item `remove_min` would return, with its priority.
    pub fn peek_min(&self) -> Result<(&P, &T)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.priority, &entry.item))
            .ok_or(EmptyError::PriorityQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
