use std::collections::HashSet;
use std::fmt;

use mazer_core::{Cell, Grid};

use crate::error::Result;
use crate::node::{NodeId, SearchNode, SearchTree};
use crate::options::{ExploredPolicy, SearchOptions};
use crate::path;
use crate::traits::Frontier;
use crate::{a_star_search, breadth_first_search_with, depth_first_search_with};

/// A successful search: the goal node, the tree it hangs from, and how many
/// neighbours were admitted on the way.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub(crate) tree: SearchTree,
    pub(crate) goal: NodeId,
    pub(crate) expansions: usize,
}

impl SearchOutcome {
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Handle of the goal node inside [`tree`](Self::tree).
    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn goal_node(&self) -> &SearchNode {
        self.tree.node(self.goal)
    }

    /// Number of neighbour-admission events during the search.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Cells from start to goal.
    pub fn path(&self) -> Vec<Cell> {
        path::reconstruct(&self.tree, self.goal)
    }

    /// Cells from start to goal, inclusive.
    pub fn path_length(&self) -> usize {
        path::path_length(&self.tree, self.goal)
    }

    /// Whether both outcomes reconstruct to the same cell sequence.
    pub fn same_path(&self, other: &SearchOutcome) -> bool {
        path::paths_equal(self, other)
    }

    /// Mark this outcome's path on `grid`. Returns the number of cells
    /// marked.
    pub fn mark_on(&self, grid: &mut Grid) -> usize {
        path::mark_path(grid, &self.path())
    }
}

/// The three search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::AStar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
            Algorithm::AStar => "A*",
        }
    }

    /// Run this strategy with default options.
    pub fn run(self, grid: &Grid) -> Result<Option<SearchOutcome>> {
        self.run_with(grid, &SearchOptions::default())
    }

    pub fn run_with(self, grid: &Grid, options: &SearchOptions) -> Result<Option<SearchOutcome>> {
        match self {
            Algorithm::DepthFirst => depth_first_search_with(grid, options),
            Algorithm::BreadthFirst => breadth_first_search_with(grid, options),
            Algorithm::AStar => a_star_search(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared loop for depth-first and breadth-first search.
///
/// The goal is tested when it is admitted: the returned goal node's parent
/// is the node being expanded at that moment.
pub(crate) fn uninformed_search<F: Frontier<NodeId>>(
    grid: &Grid,
    mut frontier: F,
    options: &SearchOptions,
    algorithm: Algorithm,
) -> Result<Option<SearchOutcome>> {
    let start = grid.start();
    let goal = grid.goal();

    let mut tree = SearchTree::new();
    frontier.push(tree.add(SearchNode::root(start)));

    let mut explored: HashSet<Cell> = HashSet::new();
    explored.insert(start);

    let mut expansions = 0usize;
    let mut nbuf = Vec::with_capacity(4);

    log::debug!("{algorithm}: searching from {} to {}", start.pos, goal.pos);

    while !frontier.is_empty() {
        let current = frontier.pop()?;
        let cell = tree.node(current).cell;

        nbuf.clear();
        grid.neighbors_into(cell.pos, &mut nbuf);

        for &next in nbuf.iter() {
            if explored.contains(&next) {
                continue;
            }
            expansions += 1;
            let child = tree.add(SearchNode::child(next, current));
            log::trace!("{algorithm}: admitted {} from {}", next.pos, cell.pos);

            if next == goal {
                log::debug!("{algorithm}: reached goal after {expansions} expansions");
                return Ok(Some(SearchOutcome {
                    tree,
                    goal: child,
                    expansions,
                }));
            }

            frontier.push(child);
            match options.explored {
                ExploredPolicy::OnAdmit => explored.insert(next),
                ExploredPolicy::OnExpand => explored.insert(cell),
            };
        }
    }

    log::debug!("{algorithm}: no path after {expansions} expansions");
    Ok(None)
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use mazer_core::Position;

    #[test]
    fn outcome_round_trip() {
        let grid = Grid::new(2, 3, Position::new(0, 0), Position::new(1, 2)).unwrap();
        let outcome = Algorithm::AStar.run(&grid).unwrap().unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert!(back.same_path(&outcome));
        assert_eq!(back.expansions(), outcome.expansions());
        assert_eq!(back.goal_node(), outcome.goal_node());
    }

    #[test]
    fn options_round_trip() {
        let opts = SearchOptions::default().with_explored(ExploredPolicy::OnExpand);
        let json = serde_json::to_string(&opts).unwrap();
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);
    }
}
