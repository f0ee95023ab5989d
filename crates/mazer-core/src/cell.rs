//! The [`Cell`] type — a grid position tagged with its [`Contents`].

use std::fmt;

use crate::geom::Position;

/// What a cell holds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Contents {
    #[default]
    Empty,
    Start,
    Goal,
    Blocked,
    Path,
}

impl Contents {
    /// Single-character symbol used by text rendering.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Contents::Empty => ' ',
            Contents::Start => '@',
            Contents::Goal => '$',
            Contents::Blocked => 'X',
            Contents::Path => '*',
        }
    }
}

/// A tagged grid cell.
///
/// Equality compares the position **and** the contents, so a cell marked
/// on-path no longer equals its open counterpart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Position,
    pub contents: Contents,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(pos: Position, contents: Contents) -> Self {
        Self { pos, contents }
    }

    /// Set the contents (builder).
    #[inline]
    pub const fn with_contents(mut self, contents: Contents) -> Self {
        self.contents = contents;
        self
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self.contents == Contents::Blocked
    }

    #[inline]
    pub fn is_goal(self) -> bool {
        self.contents == Contents::Goal
    }

    #[inline]
    pub fn is_start(self) -> bool {
        self.contents == Contents::Start
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contents {
            Contents::Empty => write!(f, "{}: [EMPTY]", self.pos),
            c => write!(f, "{}: {}", self.pos, c.symbol()),
        }
    }
}
