//! Error types for the Tidewater flood model.
//!
//! Organized by where the failure is caught: [`FieldError`] for grid
//! container construction, [`ConfigError`] for run parameters, and
//! [`FloodError`] for everything rejected before propagation starts.
//! Degenerate inputs (no finite forcing, no land) are not errors; they
//! produce an all-missing depth field.

use std::error::Error;
use std::fmt;

use crate::cell::Cell;

/// Errors from constructing or combining [`Field2D`](crate::Field2D) values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A field must have at least one row and one column.
    EmptyShape {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Buffer length does not equal `rows * cols`.
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// Nested rows of differing length.
    RaggedRows {
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// Two fields combined elementwise have different shapes.
    ShapeMismatch {
        /// Shape of the left-hand field.
        expected: (usize, usize),
        /// Shape of the right-hand field.
        actual: (usize, usize),
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape { rows, cols } => {
                write!(f, "field shape {rows}x{cols} has no cells")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer has {actual} values, expected {expected}")
            }
            Self::RaggedRows { expected, actual } => {
                write!(f, "row has {actual} values, expected {expected}")
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape {}x{} does not match {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for FieldError {}

/// Invalid run parameters, detected by `FloodConfig::validate()`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The attenuation factor is negative, NaN, or infinite.
    InvalidAttenuation {
        /// The rejected value.
        value: f32,
    },
    /// The coastline kernel threshold is negative, NaN, or infinite.
    InvalidCoastlineThreshold {
        /// The rejected value.
        value: f32,
    },
    /// An attenuation sweep was requested with no factors.
    NoFactors,
    /// An explicit worker count of zero.
    InvalidWorkerCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttenuation { value } => {
                write!(f, "attenuation factor must be finite and >= 0, got {value}")
            }
            Self::InvalidCoastlineThreshold { value } => {
                write!(f, "coastline threshold must be finite and >= 0, got {value}")
            }
            Self::NoFactors => write!(f, "attenuation sweep needs at least one factor"),
            Self::InvalidWorkerCount => write!(f, "worker count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Preconditions violated before a flood run could start.
#[derive(Clone, Debug, PartialEq)]
pub enum FloodError {
    /// An input field does not have the elevation field's shape.
    ShapeMismatch {
        /// Which input disagrees (`"mask"` or `"forcing"`).
        field: &'static str,
        /// Shape of the elevation field.
        expected: (usize, usize),
        /// Shape of the offending field.
        actual: (usize, usize),
    },
    /// A seed cell lies outside the elevation grid.
    SeedOutOfBounds {
        /// The offending seed.
        cell: Cell,
        /// Description of the valid range.
        bounds: String,
    },
    /// Run parameters failed validation.
    Config(ConfigError),
    /// A grid container could not be built.
    Field(FieldError),
}

impl fmt::Display for FloodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{field} is {}x{} but dem is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::SeedOutOfBounds { cell, bounds } => {
                write!(f, "seed {cell} outside grid {bounds}")
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Field(e) => write!(f, "field: {e}"),
        }
    }
}

impl Error for FloodError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Field(e) => Some(e),
            Self::ShapeMismatch { .. } | Self::SeedOutOfBounds { .. } => None,
        }
    }
}

impl From<ConfigError> for FloodError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<FieldError> for FloodError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_names_the_field() {
        let e = FloodError::ShapeMismatch {
            field: "mask",
            expected: (5, 5),
            actual: (4, 5),
        };
        assert_eq!(e.to_string(), "mask is 4x5 but dem is 5x5");
        assert!(e.source().is_none());
    }

    #[test]
    fn seed_out_of_bounds_names_the_cell() {
        let e = FloodError::SeedOutOfBounds {
            cell: Cell::new(2, 0),
            bounds: "[0, 2) x [0, 2)".to_string(),
        };
        assert!(e.to_string().contains(&Cell::new(2, 0).to_string()));
        assert!(e.source().is_none());
    }

    #[test]
    fn config_error_is_chained() {
        let e: FloodError = ConfigError::InvalidAttenuation { value: -1.0 }.into();
        assert!(e.to_string().contains("attenuation factor"));
        assert!(e.source().is_some());
    }
}
