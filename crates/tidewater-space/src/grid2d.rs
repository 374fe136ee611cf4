//! Shared helpers for bounded 2D grids.

use crate::error::SpaceError;
use tidewater_core::Cell;

/// Check that a cell is in bounds.
pub(crate) fn check_2d_bounds(cell: Cell, rows: usize, cols: usize) -> Result<Cell, SpaceError> {
    if cell.row >= rows || cell.col >= cols {
        return Err(SpaceError::CellOutOfBounds {
            cell,
            bounds: format!("[0, {rows}) x [0, {cols})"),
        });
    }
    Ok(cell)
}

/// Offset a single axis by `delta`, returning `None` when the result falls
/// outside `[0, len)`.
pub(crate) fn offset_axis(val: usize, delta: i32, len: usize) -> Option<usize> {
    let moved = val.checked_add_signed(delta as isize)?;
    (moved < len).then_some(moved)
}

/// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
pub(crate) fn canonical_ordering_2d(rows: usize, cols: usize) -> Vec<Cell> {
    let mut out = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            out.push(Cell::new(r, c));
        }
    }
    out
}
