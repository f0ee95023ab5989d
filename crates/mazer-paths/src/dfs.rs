use mazer_core::Grid;

use crate::error::Result;
use crate::options::SearchOptions;
use crate::search::{Algorithm, SearchOutcome, uninformed_search};
use crate::stack::Stack;

/// Depth-first search from the grid's start to its goal.
///
/// Returns `Ok(None)` when the goal cannot be reached. The path found is not
/// necessarily the shortest.
pub fn depth_first_search(grid: &Grid) -> Result<Option<SearchOutcome>> {
    depth_first_search_with(grid, &SearchOptions::default())
}

/// [`depth_first_search`] with explicit options.
pub fn depth_first_search_with(
    grid: &Grid,
    options: &SearchOptions,
) -> Result<Option<SearchOutcome>> {
    uninformed_search(grid, Stack::new(), options, Algorithm::DepthFirst)
}
