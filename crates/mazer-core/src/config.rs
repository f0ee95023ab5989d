//! Grid construction parameters.

use crate::error::{ConstructionError, Result};
use crate::geom::Position;

/// Parameters for [`Grid::random`](crate::Grid::random).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Proportion of the non-start, non-goal cells to block, in `[0, 1]`.
    pub prop_blocked: f64,
    pub start: Position,
    pub goal: Position,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            prop_blocked: 0.2,
            start: Position::new(0, 0),
            goal: Position::new(9, 9),
        }
    }
}

impl MazeConfig {
    /// Start in the top-left corner and goal in the bottom-right corner.
    pub fn square_corners(rows: usize, cols: usize, prop_blocked: f64) -> Self {
        Self {
            rows,
            cols,
            prop_blocked,
            start: Position::ZERO,
            goal: Position::new(rows.saturating_sub(1), cols.saturating_sub(1)),
        }
    }

    /// Number of cells that are neither start nor goal.
    #[inline]
    pub fn free_cells(&self) -> usize {
        (self.rows * self.cols).saturating_sub(2)
    }

    /// How many cells a random grid built from this config will block.
    ///
    /// Halves round to even.
    pub fn blocked_count(&self) -> usize {
        (self.free_cells() as f64 * self.prop_blocked).round_ties_even() as usize
    }

    /// Check every parameter, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        validate_shape(self.rows, self.cols, self.start, self.goal)?;
        if !(0.0..=1.0).contains(&self.prop_blocked) {
            return Err(ConstructionError::InvalidProportion(self.prop_blocked));
        }
        let requested = self.blocked_count();
        let free = self.free_cells();
        if requested > 0 && requested >= free {
            return Err(ConstructionError::NoFreeCells { requested, free });
        }
        Ok(())
    }
}

/// Dimension and endpoint checks shared by every grid constructor.
pub(crate) fn validate_shape(
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(ConstructionError::ZeroDimension { rows, cols });
    }
    if rows * cols < 2 {
        return Err(ConstructionError::TooSmall { rows, cols });
    }
    for pos in [start, goal] {
        if pos.row >= rows || pos.col >= cols {
            return Err(ConstructionError::OutOfBounds { pos, rows, cols });
        }
    }
    if start == goal {
        return Err(ConstructionError::StartIsGoal(start));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_ten() {
        let cfg = MazeConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (10, 10));
        assert_eq!(cfg.goal, Position::new(9, 9));
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.blocked_count(), 20); // 98 * 0.2 = 19.6
    }

    #[test]
    fn blocked_count_rounds_half_to_even() {
        // 2 free cells * 0.25 = 0.5 -> 0
        let cfg = MazeConfig::square_corners(2, 2, 0.25);
        assert_eq!(cfg.blocked_count(), 0);
        // 6 free cells * 0.25 = 1.5 -> 2
        let cfg = MazeConfig::square_corners(2, 4, 0.25);
        assert_eq!(cfg.blocked_count(), 2);
    }

    #[test]
    fn full_blocking_rejected_at_boundary() {
        // 3x3 leaves 7 free cells.
        let ok = MazeConfig::square_corners(3, 3, 6.0 / 7.0);
        assert_eq!(ok.blocked_count(), 6);
        assert!(ok.validate().is_ok());

        let full = MazeConfig::square_corners(3, 3, 1.0);
        assert_eq!(
            full.validate(),
            Err(ConstructionError::NoFreeCells { requested: 7, free: 7 })
        );

        // 6.51 rounds up to 7 as well.
        let near = MazeConfig::square_corners(3, 3, 0.93);
        assert!(matches!(near.validate(), Err(ConstructionError::NoFreeCells { .. })));
    }

    #[test]
    fn two_cells_accept_any_proportion() {
        let cfg = MazeConfig::square_corners(1, 2, 1.0);
        assert_eq!(cfg.blocked_count(), 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_parameters() {
        let mut cfg = MazeConfig::default();
        cfg.prop_blocked = 1.5;
        assert_eq!(cfg.validate(), Err(ConstructionError::InvalidProportion(1.5)));
        cfg.prop_blocked = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConstructionError::InvalidProportion(_))));

        assert_eq!(
            MazeConfig::square_corners(0, 4, 0.0).validate(),
            Err(ConstructionError::ZeroDimension { rows: 0, cols: 4 })
        );
        assert_eq!(
            MazeConfig::square_corners(1, 1, 0.0).validate(),
            Err(ConstructionError::TooSmall { rows: 1, cols: 1 })
        );

        let mut cfg = MazeConfig::default();
        cfg.goal = cfg.start;
        assert_eq!(cfg.validate(), Err(ConstructionError::StartIsGoal(Position::ZERO)));

        let mut cfg = MazeConfig::default();
        cfg.goal = Position::new(10, 0);
        assert!(matches!(cfg.validate(), Err(ConstructionError::OutOfBounds { .. })));
    }
}
