//! 2D square grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::error::SpaceError;
use crate::grid2d;
use smallvec::SmallVec;
use tidewater_core::{Cell, Field2D};

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A bounded two-dimensional square grid with 8-connected neighbourhood.
///
/// Each cell has coordinate `(row, col)`. Neighbours include the four
/// cardinal directions plus four diagonals, and every hop costs the same,
/// so distance is Chebyshev (L-inf).
///
/// Cells outside the grid are excluded rather than wrapped or clamped:
/// corners have 3 neighbours, edges have 5, interior cells have 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square8 {
    rows: usize,
    cols: usize,
}

impl Square8 {
    /// Create a new grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self { rows, cols })
    }

    /// The grid covering `field`. Fields are never empty, so this cannot fail.
    pub fn for_field<T>(field: &Field2D<T>) -> Self {
        Self {
            rows: field.rows(),
            cols: field.cols(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Return `cell` if it is in bounds, otherwise `SpaceError::CellOutOfBounds`.
    pub fn check_bounds(&self, cell: Cell) -> Result<Cell, SpaceError> {
        grid2d::check_2d_bounds(cell, self.rows, self.cols)
    }

    /// The in-bounds 8-connected neighbours of `cell`, in N, S, W, E, NW,
    /// NE, SW, SE order.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let nr = grid2d::offset_axis(cell.row, dr, self.rows);
            let nc = grid2d::offset_axis(cell.col, dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push(Cell::new(nr, nc));
            }
        }
        result
    }

    /// Chebyshev hop count between two cells, which equals the graph
    /// geodesic on an 8-connected grid.
    pub fn distance(&self, a: Cell, b: Cell) -> usize {
        a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
    }

    /// All cells in row-major canonical order.
    pub fn canonical_ordering(&self) -> Vec<Cell> {
        grid2d::canonical_ordering_2d(self.rows, self.cols)
    }

    /// Position of `cell` in the canonical ordering, or `None` if out of bounds.
    pub fn rank(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.flat(self.cols))
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn cell(&self, rank: usize) -> Option<Cell> {
        (rank < self.cell_count()).then(|| Cell::from_flat(rank, self.cols))
    }
}
