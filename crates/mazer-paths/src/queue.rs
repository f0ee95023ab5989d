use std::collections::VecDeque;

use crate::error::{EmptyError, Result};
use crate::traits::Frontier;

/// First-in, first-out frontier used by breadth-first search.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Enqueue at the tail.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Dequeue from the head.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(EmptyError::Queue)
    }

    /// The item at the head.
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(EmptyError::Queue)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        Queue::push(self, item);
    }

    fn pop(&mut self) -> Result<T> {
        Queue::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        Queue::peek(self)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }
}
