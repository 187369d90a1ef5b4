//! An immutable traversability grid.
//!
//! [`Grid`] stores one flag per cell in a flat row-major buffer. It has no
//! mutation API: obstacles are fixed once the grid is built, so a single
//! grid can be borrowed by any number of concurrent searches.

use crate::geom::Coord;
use thiserror::Error;

/// Why grid construction was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// No rows at all.
    #[error("grid has no rows")]
    Empty,
    /// Rows exist but carry no cells.
    #[error("grid rows have zero width")]
    ZeroWidth,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while building a grid or validating coordinates on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] Malformed),
    #[error("coordinate {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("coordinate {coord} is on a blocked cell")]
    Blocked { coord: Coord },
}

/// A rectangular map of traversable / blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Build a grid from a rectangular boolean matrix (`true` = traversable).
    ///
    /// Fails with [`GridError::MalformedGrid`] if the matrix is empty or its
    /// rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(Malformed::Empty.into());
        };
        let cols = first.len();
        if cols == 0 {
            return Err(Malformed::ZeroWidth.into());
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Malformed::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                }
                .into());
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Parse a grid from text, one row per line. `.` is traversable, every
    /// other character is blocked.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::from_lines(text.lines())
    }

    /// Build a grid from already-split map lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, GridError> {
        let rows = lines
            .into_iter()
            .map(|line| line.chars().map(|ch| ch == '.').collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a successfully built grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Whether the cell at `c` is traversable.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the grid.
    pub fn traversable(&self, c: Coord) -> Result<bool, GridError> {
        self.idx(c).map(|i| self.cells[i]).ok_or(GridError::OutOfBounds {
            coord: c,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Like [`traversable`](Self::traversable) but out-of-bounds cells are
    /// simply not passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.idx(c).is_some_and(|i| self.cells[i])
    }

    /// Check that `c` is a legal search endpoint: inside the grid and on a
    /// traversable cell.
    pub fn validate_endpoint(&self, c: Coord) -> Result<(), GridError> {
        if self.traversable(c)? {
            Ok(())
        } else {
            Err(GridError::Blocked { coord: c })
        }
    }

    /// Number of traversable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.row * self.cols + c.col)
    }

    /// Coordinate of a flat index. `idx` must be `< len()`.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    /// Iterate over `(Coord, traversable)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &open)| (self.coord(i), open))
    }
}
