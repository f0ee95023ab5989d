use thiserror::Error;

/// Convenient result alias for frontier operations and searches.
pub type Result<T> = std::result::Result<T, EmptyError>;

/// Removing or peeking from an empty frontier container.
///
/// The search loops check `is_empty` before removing, so seeing this from a
/// search means an engine invariant was broken; it is never used to signal
/// an unsolvable maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyError {
    #[error("stack is empty")]
    Stack,
    #[error("queue is empty")]
    Queue,
    #[error("priority queue is empty")]
    PriorityQueue,
}
