//! Error types for grid topology operations.

use std::fmt;
use tidewater_core::Cell;

/// Errors arising from grid construction or coordinate queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A cell lies outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
        }
    }
}

impl std::error::Error for SpaceError {}
