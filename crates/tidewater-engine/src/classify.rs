//! Land/sea classification.
//!
//! A cell is *floodable* when the mask marks it as land and its elevation
//! is at or below the highest finite water level anywhere in the forcing
//! field. The ceiling is global, not per-path: a cell below the global
//! maximum may still stay dry if no connected path reaches it, which the
//! propagation engine decides.

use tidewater_core::{Field2D, FieldError, LAND};

/// Whether a mask value denotes land. Exact match on [`LAND`]; `NaN` and
/// every other class are non-land.
#[inline]
pub fn is_land(mask_value: f32) -> bool {
    mask_value == LAND
}

/// Compute the floodable set:
/// `mask == LAND && dem <= max_finite(ref_level)`.
///
/// Non-finite elevations compare false and are never floodable. When
/// `ref_level` holds no finite value the result is all-false.
///
/// Returns `Err(FieldError::ShapeMismatch)` if `mask` differs in shape
/// from `dem`.
pub fn floodable_cells(
    dem: &Field2D<f32>,
    ref_level: &Field2D<f32>,
    mask: &Field2D<f32>,
) -> Result<Field2D<bool>, FieldError> {
    match ref_level.max_finite() {
        Some(ceiling) => dem.zip_map(mask, |&z, &m| is_land(m) && z <= ceiling),
        None => dem.zip_map(mask, |_, _| false),
    }
}
