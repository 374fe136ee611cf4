//! The [`Cell`] grid coordinate.

use std::fmt;

/// A `(row, col)` position in a row-major 2D grid.
///
/// Ordering is row-major, so sorting a list of cells yields the canonical
/// ordering used throughout the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, counted from the top of the raster.
    pub row: usize,
    /// Column index, counted from the left of the raster.
    pub col: usize,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index of this cell in a grid with `cols` columns.
    pub const fn flat(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`flat`](Self::flat).
    pub const fn from_flat(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
