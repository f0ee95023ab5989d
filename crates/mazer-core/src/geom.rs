//! Geometry primitives: [`Position`] and the [`manhattan`] distance.
//!
//! Positions are `(row, col)` pairs with rows growing down and columns
//! growing right. Both coordinates are non-negative.

use std::fmt;

/// A cell coordinate inside a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours in the fixed order up, down, left, right.
    ///
    /// Neighbours that would fall below row or column zero are `None`; the
    /// upper bounds are left to the caller.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Position>; 4] {
        [
            self.row.checked_sub(1).map(|r| Self::new(r, self.col)),
            Some(Self::new(self.row + 1, self.col)),
            self.col.checked_sub(1).map(|c| Self::new(self.row, c)),
            Some(Self::new(self.row, self.col + 1)),
        ]
    }

    /// Whether `other` is exactly one step away along a single axis.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        manhattan(self, other) == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let p = Position::new(2, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Some(Position::new(1, 3)),
                Some(Position::new(3, 3)),
                Some(Position::new(2, 2)),
                Some(Position::new(2, 4)),
            ]
        );
    }

    #[test]
    fn neighbors_at_origin_drop_negative() {
        let n = Position::ZERO.neighbors_4();
        assert_eq!(n[0], None);
        assert_eq!(n[2], None);
        assert_eq!(n[1], Some(Position::new(1, 0)));
        assert_eq!(n[3], Some(Position::new(0, 1)));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Position::new(0, 0), Position::new(2, 2)), 4);
        assert_eq!(manhattan(Position::new(5, 1), Position::new(2, 4)), 6);
        assert_eq!(manhattan(Position::new(3, 3), Position::new(3, 3)), 0);
    }

    #[test]
    fn adjacency() {
        let p = Position::new(1, 1);
        assert!(p.is_adjacent(Position::new(0, 1)));
        assert!(p.is_adjacent(Position::new(1, 2)));
        assert!(!p.is_adjacent(Position::new(2, 2)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Position::new(1, 0), Position::new(0, 2), Position::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]);
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }
}
