//! Grid coordinates: [`Coord`].
//!
//! Coordinates are `(row, col)` pairs of non-negative integers. Row grows
//! down, column grows right, matching the line/character layout of a map
//! file.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position on a grid, addressed as `(row, col)`.
///
/// Ordering is row-major, which keeps collections of coordinates in a
/// reproducible order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the coordinate shifted by `(dr, dc)`, or `None` if either
    /// component would become negative.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// The four axis-aligned neighbours (up, right, down, left).
    ///
    /// Neighbours that would have a negative component are `None`. Upper
    /// bounds are not checked here; that is the grid's job.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Coord>; 4] {
        [
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(1, 0),
            self.offset(0, -1),
        ]
    }

    /// Absolute row and column differences to `other`.
    #[inline]
    pub fn abs_diff(self, other: Coord) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Whether `other` is exactly one unit step away along one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let (dr, dc) = self.abs_diff(other);
        dr + dc == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_json_shape() {
        let json = serde_json::to_string(&Coord::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coord::new(3, 7));
    }
}
