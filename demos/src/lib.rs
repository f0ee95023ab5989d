//! Experiment driver shared by the `experiments` binary.
//!
//! Demonstrates: random maze generation, running DFS, BFS and A* on
//! independent copies of the same maze, comparing their work and path
//! lengths, and rendering the marked paths.

use std::fmt;

use mazer_core::{ConstructionError, Grid, Position};
use mazer_paths::{Algorithm, EmptyError};
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that can stop the driver.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// A search popped an empty frontier.
    #[error("search engine invariant broken: {0}")]
    Engine(#[from] EmptyError),

    #[error("invalid size range {min}..={max}")]
    SizeRange { min: usize, max: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Fixed maze
// ---------------------------------------------------------------------------

const CLASSROOM_BLOCKS: [(usize, usize); 13] = [
    (0, 5),
    (0, 7),
    (1, 1),
    (2, 7),
    (3, 1),
    (3, 2),
    (3, 9),
    (4, 2),
    (5, 2),
    (5, 5),
    (6, 1),
    (8, 5),
    (8, 9),
];

/// A hand-made 10x10 maze from (0, 0) to (9, 9) with 13 blocked cells.
pub fn classroom_maze() -> Result<Grid, ConstructionError> {
    let blocked: Vec<Position> = CLASSROOM_BLOCKS.iter().copied().map(Position::from).collect();
    Grid::with_blocked(10, 10, Position::new(0, 0), Position::new(9, 9), &blocked)
}

// ---------------------------------------------------------------------------
// Experiment
// ---------------------------------------------------------------------------

/// One algorithm's result on one maze.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub expansions: usize,
    pub path_length: usize,
    /// The maze copy with this run's path marked.
    #[serde(skip)]
    pub grid: Grid,
}

/// Side-by-side comparison of DFS, BFS and A* on one maze.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub rows: usize,
    pub cols: usize,
    /// In [`Algorithm::ALL`] order.
    pub runs: Vec<AlgorithmRun>,
    pub bfs_astar_same_length: bool,
    pub bfs_astar_same_path: bool,
}

impl ExperimentReport {
    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} expansions:", self.rows, self.cols)?;
        for r in &self.runs {
            write!(f, " {} {}", r.algorithm, r.expansions)?;
        }
        write!(f, " | lengths:")?;
        for r in &self.runs {
            write!(f, " {} {}", r.algorithm, r.path_length)?;
        }
        write!(
            f,
            " | BFS/A* same length: {}, same path: {}",
            self.bfs_astar_same_length, self.bfs_astar_same_path
        )
    }
}

/// Run all three searches on independent copies of `maze`.
///
/// Returns `Ok(None)` when the maze has no solution.
pub fn run_experiment(maze: &Grid) -> Result<Option<ExperimentReport>, DemoError> {
    let mut runs = Vec::with_capacity(Algorithm::ALL.len());
    let mut outcomes = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        let mut copy = maze.clone();
        let Some(outcome) = algorithm.run(&copy)? else {
            log::debug!("{algorithm} found no path; maze is unsolvable");
            return Ok(None);
        };
        outcome.mark_on(&mut copy);
        runs.push(AlgorithmRun {
            algorithm,
            expansions: outcome.expansions(),
            path_length: outcome.path_length(),
            grid: copy,
        });
        outcomes.push(outcome);
    }

    let (bfs, astar) = (&outcomes[1], &outcomes[2]);
    Ok(Some(ExperimentReport {
        rows: maze.rows(),
        cols: maze.cols(),
        bfs_astar_same_length: bfs.path_length() == astar.path_length(),
        bfs_astar_same_path: bfs.same_path(astar),
        runs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::{Contents, MazeConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn classroom_maze_layout() {
        let maze = classroom_maze().unwrap();
        assert_eq!(maze.count(Contents::Blocked), 13);
        assert!(maze.at(Position::new(3, 9)).unwrap().is_blocked());
        assert!(maze.at(Position::new(9, 9)).unwrap().is_goal());
    }

    #[test]
    fn classroom_maze_comparison() {
        let maze = classroom_maze().unwrap();
        let report = run_experiment(&maze).unwrap().unwrap();
        assert_eq!(report.runs.len(), 3);
        assert!(report.bfs_astar_same_length);
        assert_eq!(report.run(Algorithm::BreadthFirst).unwrap().path_length, 19);
        assert_eq!(report.run(Algorithm::AStar).unwrap().path_length, 19);
        assert!(report.run(Algorithm::DepthFirst).unwrap().path_length >= 19);

        // Each copy carries its own path; the original is untouched.
        assert_eq!(maze.count(Contents::Path), 0);
        let bfs = report.run(Algorithm::BreadthFirst).unwrap();
        assert_eq!(bfs.grid.count(Contents::Path), 17);
    }

    #[test]
    fn unsolvable_maze_has_no_report() {
        let blocked = [Position::new(0, 1), Position::new(1, 0)];
        let maze = Grid::with_blocked(3, 3, Position::new(0, 0), Position::new(2, 2), &blocked)
            .unwrap();
        assert!(run_experiment(&maze).unwrap().is_none());
    }

    #[test]
    fn random_reports_agree() {
        let mut rng = StdRng::seed_from_u64(2021);
        for _ in 0..20 {
            let maze = Grid::random(&MazeConfig::square_corners(8, 9, 0.2), &mut rng).unwrap();
            if let Some(report) = run_experiment(&maze).unwrap() {
                assert!(report.bfs_astar_same_length, "{report}");
            }
        }
    }

    #[test]
    fn report_serializes_without_grids() {
        let maze = classroom_maze().unwrap();
        let report = run_experiment(&maze).unwrap().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"], 10);
        assert_eq!(json["runs"][2]["algorithm"], "AStar");
        assert_eq!(json["runs"][1]["path_length"], 19);
        assert!(json["runs"][0].get("grid").is_none());
    }

    #[test]
    fn report_display() {
        let maze = Grid::new(1, 2, Position::new(0, 0), Position::new(0, 1)).unwrap();
        let report = run_experiment(&maze).unwrap().unwrap();
        assert_eq!(
            report.to_string(),
            "1x2 expansions: DFS 1 BFS 1 A* 1 | lengths: DFS 2 BFS 2 A* 2 \
             | BFS/A* same length: true, same path: true"
        );
    }
}
