//! **mazer-core** — grid maze model for the *mazer* search engine.
//!
//! This crate provides the foundational types shared by the search
//! algorithms and the drivers: positions, tagged cells, the maze [`Grid`]
//! with its fixed neighbour order, construction parameters and errors, and
//! plain-text rendering.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Contents};
pub use config::MazeConfig;
pub use error::{ConstructionError, Result};
pub use geom::{Position, manhattan};
pub use grid::Grid;
