//! The [`Grid`] type — a fixed-size 2D maze of [`Cell`]s.
//!
//! A `Grid` owns its cells outright: cloning yields an independent deep
//! copy, so several algorithms can mark paths on their own copy of the same
//! maze without disturbing each other.

use std::fmt;

use rand::{Rng, RngExt};

use crate::cell::{Cell, Contents};
use crate::config::{MazeConfig, validate_shape};
use crate::error::{ConstructionError, Result};
use crate::geom::Position;

/// A maze of open and blocked cells with one start and one goal.
///
/// The blocked/open layout is fixed at construction. The only change allowed
/// afterwards is marking open cells as part of a path (and clearing those
/// marks again).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Create a grid with every cell open except the start and the goal.
    pub fn new(rows: usize, cols: usize, start: Position, goal: Position) -> Result<Self> {
        validate_shape(rows, cols, start, goal)?;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Position::new(row, col), Contents::Empty));
            }
        }
        let mut grid = Self {
            cells,
            rows,
            cols,
            start,
            goal,
        };
        grid.put(start, Contents::Start);
        grid.put(goal, Contents::Goal);
        Ok(grid)
    }

    /// Create a grid with an explicit set of blocked cells.
    ///
    /// Repeated positions count once. Blocking every cell other than the
    /// start and the goal is rejected, as in [`MazeConfig::validate`].
    pub fn with_blocked(
        rows: usize,
        cols: usize,
        start: Position,
        goal: Position,
        blocked: &[Position],
    ) -> Result<Self> {
        let mut grid = Self::new(rows, cols, start, goal)?;
        let mut distinct = Vec::with_capacity(blocked.len());
        for &pos in blocked {
            if !grid.contains(pos) {
                return Err(ConstructionError::OutOfBounds { pos, rows, cols });
            }
            if pos == start || pos == goal {
                return Err(ConstructionError::BlockedEndpoint(pos));
            }
            distinct.push(pos);
        }
        distinct.sort_unstable();
        distinct.dedup();

        let requested = distinct.len();
        let free = rows * cols - 2;
        if requested > 0 && requested >= free {
            return Err(ConstructionError::NoFreeCells { requested, free });
        }
        for pos in distinct {
            grid.put(pos, Contents::Blocked);
        }
        Ok(grid)
    }

    /// Create a grid whose blocked cells are sampled uniformly at random.
    ///
    /// Exactly [`MazeConfig::blocked_count`] distinct cells, never the start
    /// or the goal, are blocked.
    pub fn random(config: &MazeConfig, rng: &mut impl Rng) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::new(config.rows, config.cols, config.start, config.goal)?;

        let mut options: Vec<Position> = grid
            .cells
            .iter()
            .filter(|c| c.contents == Contents::Empty)
            .map(|c| c.pos)
            .collect();

        // Partial Fisher-Yates: the first `k` slots end up a uniform sample.
        let k = config.blocked_count();
        for i in 0..k {
            let j = rng.random_range(i..options.len());
            options.swap(i, j);
            grid.put(options[i], Contents::Blocked);
        }

        log::debug!(
            "generated {}x{} maze with {} blocked cells",
            config.rows,
            config.cols,
            k
        );
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if self.contains(p) {
            Some(p.row * self.cols + p.col)
        } else {
            None
        }
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Position) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    fn put(&mut self, p: Position, contents: Contents) {
        if let Some(i) = self.index(p) {
            self.cells[i].contents = contents;
        }
    }

    /// The start cell.
    pub fn start(&self) -> Cell {
        Cell::new(self.start, Contents::Start)
    }

    /// The goal cell.
    pub fn goal(&self) -> Cell {
        Cell::new(self.goal, Contents::Goal)
    }

    /// Open cells adjacent to `cell`, in the order up, down, left, right.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(cell.pos, &mut buf);
        buf
    }

    /// Append the non-blocked neighbours of `p` to `buf`, in the order up,
    /// down, left, right. The caller clears `buf` before calling.
    pub fn neighbors_into(&self, p: Position, buf: &mut Vec<Cell>) {
        for n in p.neighbors_4().into_iter().flatten() {
            if let Some(c) = self.at(n) {
                if !c.is_blocked() {
                    buf.push(c);
                }
            }
        }
    }

    /// Mark the cell at `p` as part of a path.
    ///
    /// Only open cells change; returns whether the cell was marked.
    pub fn mark_on_path(&mut self, p: Position) -> bool {
        match self.index(p) {
            Some(i) if self.cells[i].contents == Contents::Empty => {
                self.cells[i].contents = Contents::Path;
                true
            }
            _ => false,
        }
    }

    /// Reset every path cell back to open.
    pub fn clear_path(&mut self) {
        for c in self.cells.iter_mut() {
            if c.contents == Contents::Path {
                c.contents = Contents::Empty;
            }
        }
    }

    /// Count cells holding `contents`.
    pub fn count(&self, contents: Contents) -> usize {
        self.cells.iter().filter(|c| c.contents == contents).count()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = (row * self.cols).min(self.cells.len());
        let end = (start + self.cols).min(self.cells.len());
        &self.cells[start..end]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    /// One line per row, each symbol padded to two columns between pipes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for c in self.row(row) {
                write!(f, "{:<2}|", c.contents.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn new_places_start_and_goal() {
        let g = Grid::new(3, 4, p(0, 0), p(2, 3)).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.at(p(0, 0)), Some(g.start()));
        assert_eq!(g.at(p(2, 3)), Some(g.goal()));
        assert_eq!(g.count(Contents::Empty), 10);
        assert_eq!(g.at(p(3, 0)), None);
    }

    #[test]
    fn new_rejects_bad_shape() {
        assert!(matches!(
            Grid::new(0, 3, p(0, 0), p(0, 1)),
            Err(ConstructionError::ZeroDimension { .. })
        ));
        assert!(matches!(
            Grid::new(2, 2, p(1, 1), p(1, 1)),
            Err(ConstructionError::StartIsGoal(_))
        ));
    }

    #[test]
    fn neighbors_fixed_order_and_filtered() {
        let g = Grid::with_blocked(3, 3, p(0, 0), p(2, 2), &[p(1, 0)]).unwrap();
        let centre = g.at(p(1, 1)).unwrap();
        let got: Vec<Position> = g.neighbors(centre).iter().map(|c| c.pos).collect();
        // up, down, right; left is blocked
        assert_eq!(got, vec![p(0, 1), p(2, 1), p(1, 2)]);

        let corner: Vec<Position> = g.neighbors(g.start()).iter().map(|c| c.pos).collect();
        assert_eq!(corner, vec![p(0, 1)]);
    }

    #[test]
    fn with_blocked_rejects_endpoints_and_out_of_bounds() {
        assert_eq!(
            Grid::with_blocked(3, 3, p(0, 0), p(2, 2), &[p(2, 2)]),
            Err(ConstructionError::BlockedEndpoint(p(2, 2)))
        );
        assert!(matches!(
            Grid::with_blocked(3, 3, p(0, 0), p(2, 2), &[p(3, 1)]),
            Err(ConstructionError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn with_blocked_needs_a_free_cell() {
        let all_free: Vec<Position> = (0..3)
            .flat_map(|r| (0..3).map(move |c| p(r, c)))
            .filter(|&q| q != p(0, 0) && q != p(2, 2))
            .collect();
        assert_eq!(all_free.len(), 7);

        let g = Grid::with_blocked(3, 3, p(0, 0), p(2, 2), &all_free[..6]).unwrap();
        assert_eq!(g.count(Contents::Blocked), 6);
        assert_eq!(
            Grid::with_blocked(3, 3, p(0, 0), p(2, 2), &all_free),
            Err(ConstructionError::NoFreeCells {
                requested: 7,
                free: 7
            })
        );
    }

    #[test]
    fn with_blocked_counts_repeats_once() {
        // 2x2 has two free cells; one repeated twice still leaves the other.
        let g = Grid::with_blocked(2, 2, p(0, 0), p(1, 0), &[p(0, 1), p(0, 1)]).unwrap();
        assert_eq!(g.count(Contents::Blocked), 1);
        assert!(!g.at(p(1, 1)).unwrap().is_blocked());
    }

    #[test]
    fn random_blocks_exact_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = MazeConfig::square_corners(8, 6, 0.3);
        let g = Grid::random(&cfg, &mut rng).unwrap();
        assert_eq!(g.count(Contents::Blocked), cfg.blocked_count());
        assert_eq!(g.count(Contents::Start), 1);
        assert_eq!(g.count(Contents::Goal), 1);
        assert!(!g.at(cfg.start).unwrap().is_blocked());
        assert!(!g.at(cfg.goal).unwrap().is_blocked());
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let cfg = MazeConfig::default();
        let a = Grid::random(&cfg, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Grid::random(&cfg, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_rejects_full_blocking() {
        let cfg = MazeConfig::square_corners(3, 3, 1.0);
        let err = Grid::random(&cfg, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, ConstructionError::NoFreeCells { requested: 7, free: 7 });
    }

    #[test]
    fn mark_only_open_cells() {
        let mut g = Grid::with_blocked(2, 3, p(0, 0), p(1, 2), &[p(1, 1)]).unwrap();
        assert!(g.mark_on_path(p(0, 1)));
        assert!(!g.mark_on_path(p(0, 1)));
        assert!(!g.mark_on_path(p(0, 0)));
        assert!(!g.mark_on_path(p(1, 1)));
        assert!(!g.mark_on_path(p(5, 5)));
        assert_eq!(g.count(Contents::Path), 1);

        g.clear_path();
        assert_eq!(g.count(Contents::Path), 0);
        assert_eq!(g.at(p(0, 1)).unwrap().contents, Contents::Empty);
    }

    #[test]
    fn clone_is_independent() {
        let g = Grid::new(2, 2, p(0, 0), p(1, 1)).unwrap();
        let mut copy = g.clone();
        copy.mark_on_path(p(0, 1));
        assert_eq!(g.count(Contents::Path), 0);
        assert_eq!(copy.count(Contents::Path), 1);
    }

    #[test]
    fn display_renders_pipes() {
        let mut g = Grid::with_blocked(2, 3, p(0, 0), p(1, 2), &[p(1, 0)]).unwrap();
        g.mark_on_path(p(0, 1));
        assert_eq!(g.to_string(), "|@ |* |  |\n|X |  |$ |");
    }
}
