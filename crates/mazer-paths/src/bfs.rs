use mazer_core::Grid;

use crate::error::Result;
use crate::options::SearchOptions;
use crate::queue::Queue;
use crate::search::{Algorithm, SearchOutcome, uninformed_search};

/// Breadth-first search from the grid's start to its goal.
///
/// Every step has cost 1, so the path found is a shortest one. Returns
/// `Ok(None)` when the goal cannot be reached.
pub fn breadth_first_search(grid: &Grid) -> Result<Option<SearchOutcome>> {
    breadth_first_search_with(grid, &SearchOptions::default())
}

/// [`breadth_first_search`] with explicit options.
pub fn breadth_first_search_with(
    grid: &Grid,
    options: &SearchOptions,
) -> Result<Option<SearchOutcome>> {
    uninformed_search(grid, Queue::new(), options, Algorithm::BreadthFirst)
}
