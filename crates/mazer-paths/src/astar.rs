use std::collections::HashMap;

use mazer_core::{Grid, Position, manhattan};

use crate::error::Result;
use crate::node::{SearchNode, SearchTree};
use crate::priority_queue::PriorityQueue;
use crate::search::SearchOutcome;

/// A* search from the grid's start to its goal.
///
/// Every step costs 1 and the Manhattan distance to the goal is the
/// heuristic, so the path found is a shortest one. Returns `Ok(None)` when
/// the goal cannot be reached.
pub fn a_star_search(grid: &Grid) -> Result<Option<SearchOutcome>> {
    let start = grid.start();
    let goal = grid.goal();

    let mut tree = SearchTree::new();
    let h = manhattan(start.pos, goal.pos);
    let root = tree.add(SearchNode::root(start).with_estimate(0, h));

    let mut open: PriorityQueue<_, u32> = PriorityQueue::new();
    open.insert(h, root);

    // Lowest cost seen so far for each position.
    let mut best: HashMap<Position, u32> = HashMap::new();
    best.insert(start.pos, 0);

    let mut expansions = 0usize;
    let mut nbuf = Vec::with_capacity(4);

    log::debug!("A*: searching from {} to {}", start.pos, goal.pos);

    while !open.is_empty() {
        let current = open.remove_min()?;
        let node = *tree.node(current);

        if node.cell == goal {
            log::debug!("A*: reached goal after {expansions} expansions");
            return Ok(Some(SearchOutcome {
                tree,
                goal: current,
                expansions,
            }));
        }

        let g = node.cost.unwrap_or(0);

        // Skip stale entries superseded by a cheaper path.
        if best.get(&node.cell.pos).is_some_and(|&b| g > b) {
            continue;
        }

        nbuf.clear();
        grid.neighbors_into(node.cell.pos, &mut nbuf);

        for &next in nbuf.iter() {
            let tentative = g + 1;
            if best.get(&next.pos).is_some_and(|&b| tentative >= b) {
                continue;
            }
            expansions += 1;
            best.insert(next.pos, tentative);

            let h = manhattan(next.pos, goal.pos);
            let child = tree.add(SearchNode::child(next, current).with_estimate(tentative, h));
            open.insert(tentative + h, child);
            log::trace!("A*: admitted {} with f = {}", next.pos, tentative + h);
        }
    }

    log::debug!("A*: no path after {expansions} expansions");
    Ok(None)
}
