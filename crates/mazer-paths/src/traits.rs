use crate::error::Result;

/// Ordered container of discovered-but-unexpanded entries.
///
/// The uninformed searches are written once against this trait; the
/// container's removal order is what makes them depth-first or
/// breadth-first.
pub trait Frontier<T> {
    /// Add an entry.
    fn push(&mut self, item: T);

    /// Remove the next entry in this container's order.
    fn pop(&mut self) -> Result<T>;

    /// The entry `pop` would return, without removing it.
    fn peek(&self) -> Result<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
