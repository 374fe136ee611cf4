//! The [`Field2D`] dense grid container and value sentinels.
//!
//! Every raster the flood model touches (elevation, land/sea mask, forcing,
//! water level, depth) is a `Field2D` of the same shape. Storage is a flat
//! row-major `Vec<T>`, so `field.as_slice()[cell.flat(cols)]` and
//! `field[cell]` address the same value.

use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::error::FieldError;

/// Missing-value sentinel for real-valued fields.
///
/// Raster nodata values are normalized to this before the engine sees them.
pub const MISSING: f32 = f32::NAN;

/// Mask value denoting a land cell. Any other value (including `NaN`) is
/// sea, no-data, or some other non-land class.
pub const LAND: f32 = 1.0;

/// A dense `rows × cols` grid of values stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2D<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Field2D<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// Returns `Err(FieldError::EmptyShape)` if either dimension is 0 and
    /// `Err(FieldError::LengthMismatch)` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, FieldError> {
        if rows == 0 || cols == 0 {
            return Err(FieldError::EmptyShape { rows, cols });
        }
        let expected = rows * cols;
        if data.len() != expected {
            return Err(FieldError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: construction rejects empty shapes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `other` has the same `(rows, cols)`.
    pub fn same_shape<U>(&self, other: &Field2D<U>) -> bool {
        self.shape() == other.shape()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Bounds-checked read.
    pub fn get(&self, cell: Cell) -> Option<&T> {
        if self.contains(cell) {
            self.data.get(cell.flat(self.cols))
        } else {
            None
        }
    }

    /// Bounds-checked mutable access.
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        if self.contains(cell) {
            let cols = self.cols;
            self.data.get_mut(cell.flat(cols))
        } else {
            None
        }
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The underlying row-major buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the field and return its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate `(cell, &value)` in canonical row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (Cell::from_flat(i, cols), v))
    }

    /// Apply `f` to every value, producing a field of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Field2D<U> {
        Field2D {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Combine two same-shape fields elementwise.
    ///
    /// Returns `Err(FieldError::ShapeMismatch)` if the shapes differ.
    pub fn zip_map<U, V>(
        &self,
        other: &Field2D<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<Field2D<V>, FieldError> {
        if !self.same_shape(other) {
            return Err(FieldError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(Field2D {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    /// Number of cells whose value satisfies `pred`.
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.data.iter().filter(|v| pred(v)).count()
    }

    /// Cells whose value satisfies `pred`, in canonical order.
    pub fn cells_where(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<Cell> {
        self.iter_cells()
            .filter(|(_, v)| pred(v))
            .map(|(c, _)| c)
            .collect()
    }
}

impl<T: Clone> Field2D<T> {
    /// A field with every cell set to `value`.
    ///
    /// Returns `Err(FieldError::EmptyShape)` if either dimension is 0.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, FieldError> {
        if rows == 0 || cols == 0 {
            return Err(FieldError::EmptyShape { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Build a field from nested rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, FieldError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(FieldError::RaggedRows {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(n_rows, n_cols, data)
    }
}

impl Field2D<f32> {
    /// Largest finite value, ignoring `NaN` and `±∞`. `None` when the field
    /// holds no finite value at all.
    pub fn max_finite(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Number of finite cells.
    pub fn finite_count(&self) -> usize {
        self.count(|v| v.is_finite())
    }

    /// Number of cells holding the [`MISSING`] sentinel.
    pub fn missing_count(&self) -> usize {
        self.count(|v| v.is_nan())
    }

    /// Replace every non-finite value (`NaN`, `±∞`) with `replacement`.
    pub fn normalize_non_finite(&mut self, replacement: f32) {
        for v in &mut self.data {
            if !v.is_finite() {
                *v = replacement;
            }
        }
    }
}

impl<T> Index<Cell> for Field2D<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        assert!(
            self.contains(cell),
            "cell {cell} out of bounds for {}x{} field",
            self.rows,
            self.cols
        );
        &self.data[cell.flat(self.cols)]
    }
}

impl<T> IndexMut<Cell> for Field2D<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        assert!(
            self.contains(cell),
            "cell {cell} out of bounds for {}x{} field",
            self.rows,
            self.cols
        );
        let cols = self.cols;
        &mut self.data[cell.flat(cols)]
    }
}
