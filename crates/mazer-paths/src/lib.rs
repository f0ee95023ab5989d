//! Search algorithms for mazer grids.
//!
//! This crate finds a path from a [`Grid`](mazer_core::Grid)'s start to its
//! goal with one of three strategies:
//!
//! - **Depth-first** search over a [`Stack`] ([`depth_first_search`])
//! - **Breadth-first** search over a [`Queue`] ([`breadth_first_search`])
//! - **A\*** with the Manhattan heuristic over a [`PriorityQueue`]
//!   ([`a_star_search`])
//!
//! Every search returns `Ok(Some(outcome))` with the goal node and the
//! number of admitted neighbours, or `Ok(None)` when the frontier runs dry.
//! An `Err` is never a "no path" answer: it means a frontier was popped while
//! empty.
//!
//! Nodes live in a [`SearchTree`] arena and point at their parents by
//! [`NodeId`]; [`reconstruct`] walks those links back to the start.

mod astar;
mod bfs;
mod dfs;
mod error;
mod node;
mod options;
mod path;
mod priority_queue;
mod queue;
mod search;
mod stack;
mod traits;


pub use astar::a_star_search;
pub use bfs::{breadth_first_search, breadth_first_search_with};
pub use dfs::{depth_first_search, depth_first_search_with};
pub use error::{EmptyError, Result};
pub use node::{Ancestors, NodeId, SearchNode, SearchTree};
pub use options::{ExploredPolicy, SearchOptions};
pub use path::{mark_path, path_length, paths_equal, reconstruct};
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use search::{Algorithm, SearchOutcome};
pub use stack::Stack;
pub use traits::Frontier;
