//! Path reconstruction and comparison.

use mazer_core::{Cell, Grid};

use crate::node::{NodeId, SearchTree};
use crate::search::SearchOutcome;

/// Follow parent links from `goal` to the root and return the cells in
/// start-to-goal order.
pub fn reconstruct(tree: &SearchTree, goal: NodeId) -> Vec<Cell> {
    let mut path: Vec<Cell> = tree.ancestors(goal).map(|n| n.cell).collect();
    path.reverse();
    path
}

/// Number of cells from the root to `goal`, inclusive.
pub fn path_length(tree: &SearchTree, goal: NodeId) -> usize {
    tree.ancestors(goal).count()
}

/// Whether two outcomes reconstruct to element-wise equal cell sequences.
pub fn paths_equal(a: &SearchOutcome, b: &SearchOutcome) -> bool {
    // Comparing goal-to-root walks is the same as comparing the reversed
    // paths, and avoids building either one.
    a.tree
        .ancestors(a.goal)
        .map(|n| n.cell)
        .eq(b.tree.ancestors(b.goal).map(|n| n.cell))
}

/// Mark every cell of `path` except the start and the goal as on-path in
/// `grid`. Returns the number of cells that changed.
pub fn mark_path(grid: &mut Grid, path: &[Cell]) -> usize {
    let start = grid.start().pos;
    let goal = grid.goal().pos;
    let mut marked = 0;
    for cell in path {
        if cell.pos == start || cell.pos == goal {
            continue;
        }
        if grid.mark_on_path(cell.pos) {
            marked += 1;
        }
    }
    marked
}
