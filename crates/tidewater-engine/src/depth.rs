//! Depth extraction from a converged water-level field.

use tidewater_core::{Field2D, FieldError, MISSING};

use crate::classify::is_land;

/// Flood-map value for a cell with finite depth.
pub const FLOODED: u8 = 1;

/// Flood-map value for a dry or unmodelled cell.
pub const NOT_FLOODED: u8 = 255;

/// Flood depth `level - dem` on land cells.
///
/// The result is [`MISSING`] wherever the mask is not land, the level was
/// never reached (`-inf`), the elevation is missing, or the difference is
/// negative.
///
/// Returns `Err(FieldError::ShapeMismatch)` if the three fields differ in
/// shape.
pub fn extract_depth(
    level: &Field2D<f32>,
    dem: &Field2D<f32>,
    mask: &Field2D<f32>,
) -> Result<Field2D<f32>, FieldError> {
    let raw = level.zip_map(dem, |&l, &z| {
        if l.is_finite() {
            l - z
        } else {
            MISSING
        }
    })?;
    raw.zip_map(mask, |&d, &m| {
        if is_land(m) && d.is_finite() && d >= 0.0 {
            d
        } else {
            MISSING
        }
    })
}

/// Binary flood indicator: [`FLOODED`] where `depth` is finite,
/// [`NOT_FLOODED`] elsewhere.
pub fn flood_map(depth: &Field2D<f32>) -> Field2D<u8> {
    depth.map(|d| if d.is_finite() { FLOODED } else { NOT_FLOODED })
}

/// Aggregate statistics over a depth field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DepthSummary {
    /// Cells with a finite depth.
    pub flooded_cells: usize,
    /// Deepest flooded cell, `0.0` when nothing flooded.
    pub max_depth: f32,
    /// Mean depth over flooded cells, `0.0` when nothing flooded.
    pub mean_depth: f32,
}

impl DepthSummary {
    /// Summarize `depth`, ignoring missing cells.
    pub fn of(depth: &Field2D<f32>) -> Self {
        let mut flooded_cells = 0usize;
        let mut max_depth = 0.0f32;
        let mut sum = 0.0f64;
        for &d in depth.as_slice().iter().filter(|d| d.is_finite()) {
            flooded_cells += 1;
            max_depth = max_depth.max(d);
            sum += f64::from(d);
        }
        let mean_depth = if flooded_cells == 0 {
            0.0
        } else {
            (sum / flooded_cells as f64) as f32
        };
        Self {
            flooded_cells,
            max_depth,
            mean_depth,
        }
    }
}
