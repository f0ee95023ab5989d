use crate::error::{EmptyError, Result};
use crate::traits::Frontier;

/// Last-in, first-out frontier used by depth-first search.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the most recently pushed item.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(EmptyError::Stack)
    }

    /// The most recently pushed item.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(EmptyError::Stack)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        Stack::push(self, item);
    }

    fn pop(&mut self) -> Result<T> {
        Stack::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        Stack::peek(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }
}
