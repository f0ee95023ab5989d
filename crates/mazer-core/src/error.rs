use thiserror::Error;

use crate::geom::Position;

/// Convenient result alias for grid construction.
pub type Result<T> = std::result::Result<T, ConstructionError>;

/// Invalid grid parameters, reported when the grid is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// One of the dimensions is zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    /// A grid needs room for distinct start and goal cells.
    #[error("grid {rows}x{cols} has fewer than two cells")]
    TooSmall { rows: usize, cols: usize },

    /// The start, the goal or an explicit blocked cell lies outside the grid.
    #[error("position {pos} is outside a {rows}x{cols} grid")]
    OutOfBounds { pos: Position, rows: usize, cols: usize },

    #[error("start and goal overlap at {0}")]
    StartIsGoal(Position),

    /// An explicit blocked cell sits on the start or the goal.
    #[error("cannot block {0}: it is the start or the goal")]
    BlockedEndpoint(Position),

    #[error("blocked proportion {0} is not within [0, 1]")]
    InvalidProportion(f64),

    /// The requested blocked count would leave no open cell besides start
    /// and goal.
    #[error("cannot block {requested} of {free} free cells")]
    NoFreeCells { requested: usize, free: usize },
}
