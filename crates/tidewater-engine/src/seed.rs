//! Frontier seeding.
//!
//! Builds the water-level field and initial frontier queue a propagation
//! run starts from. Two strategies share one entry point, [`seed`]:
//!
//! - [`SeedStrategy::Edge`]: the frontier is the coastline, i.e. land cells
//!   picked out by a 3×3 edge-detection kernel over the land/non-land mask.
//! - [`SeedStrategy::Boundary`]: the frontier is every cell where the
//!   forcing field is already finite, for forcing rasters that encode a
//!   pre-flooded boundary such as a regional storm-surge field.
//!
//! In both strategies every non-finite forcing value becomes `-inf` in the
//! level field, so it can neither seed nor block a relaxation.

use std::collections::VecDeque;

use tidewater_core::{Cell, Field2D, FieldError};
use tidewater_space::Square8;

use crate::classify::is_land;

/// Weight of the centre cell in the coastline kernel
/// `[[-1,-1,-1],[-1,8,-1],[-1,-1,-1]]`; every neighbour weighs `-1`.
const KERNEL_CENTRE: f32 = 8.0;

/// Land/non-land indicator fed to the coastline kernel.
const LAND_INDICATOR: f32 = 0.0;
const NON_LAND_INDICATOR: f32 = -1.0;

/// How the initial frontier and water level are constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedStrategy {
    /// Seed from coastline land cells detected in the mask.
    #[default]
    Edge,
    /// Seed from every cell with a finite forcing value.
    Boundary,
}

impl SeedStrategy {
    /// Lower-case name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Boundary => "boundary",
        }
    }
}

/// Output of [`seed`]: the starting water level and frontier queue.
#[derive(Clone, Debug)]
pub struct Seeding {
    /// Initial water level, `-inf` wherever the forcing is not finite.
    pub level: Field2D<f32>,
    /// Seed cells in canonical row-major order, each at most once.
    pub frontier: VecDeque<Cell>,
}

/// Seed a propagation run.
///
/// `threshold` only matters for [`SeedStrategy::Edge`].
///
/// Returns `Err(FieldError::ShapeMismatch)` if `mask` and `forcing` differ
/// in shape under the edge strategy.
pub fn seed(
    strategy: SeedStrategy,
    forcing: &Field2D<f32>,
    mask: &Field2D<f32>,
    threshold: f32,
) -> Result<Seeding, FieldError> {
    let mut level = forcing.clone();
    level.normalize_non_finite(f32::NEG_INFINITY);

    let frontier: VecDeque<Cell> = match strategy {
        SeedStrategy::Edge => {
            if !forcing.same_shape(mask) {
                return Err(FieldError::ShapeMismatch {
                    expected: forcing.shape(),
                    actual: mask.shape(),
                });
            }
            coastline_cells(mask, threshold).into()
        }
        SeedStrategy::Boundary => level.cells_where(|v| v.is_finite()).into(),
    };

    Ok(Seeding { level, frontier })
}

/// Response of the coastline kernel at every cell.
///
/// The kernel runs over an indicator that is `0` on land and `-1`
/// elsewhere, with zero padding beyond the grid. For a land cell the
/// response equals the number of non-land 8-neighbours; for a non-land
/// cell it is `-8` plus that count, so never positive.
pub fn coastline_response(mask: &Field2D<f32>) -> Field2D<f32> {
    let grid = Square8::for_field(mask);
    let indicator = mask.map(|&m| {
        if is_land(m) {
            LAND_INDICATOR
        } else {
            NON_LAND_INDICATOR
        }
    });
    let mut response = indicator.clone();
    for (cell, &centre) in indicator.iter_cells() {
        let ring: f32 = grid.neighbours(cell).iter().map(|&n| indicator[n]).sum();
        response[cell] = KERNEL_CENTRE * centre - ring;
    }
    response
}

/// Cells whose coastline kernel response is strictly greater than
/// `threshold`, in canonical order.
pub fn coastline_cells(mask: &Field2D<f32>, threshold: f32) -> Vec<Cell> {
    coastline_response(mask).cells_where(|&r| r > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_core::MISSING;

    fn field(rows: &[Vec<f32>]) -> Field2D<f32> {
        Field2D::from_rows(rows).unwrap()
    }

    fn c(r: usize, col: usize) -> Cell {
        Cell::new(r, col)
    }

    // ── Coastline kernel ────────────────────────────────────────

    #[test]
    fn response_counts_non_land_neighbours() {
        // Sea in the left column, land elsewhere.
        let mask = field(&[
            vec![0.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0],
        ]);
        let r = coastline_response(&mask);
        assert_eq!(r[c(0, 1)], 2.0);
        assert_eq!(r[c(1, 1)], 3.0);
        assert_eq!(r[c(2, 1)], 2.0);
        assert_eq!(r[c(1, 2)], 0.0);
        // Sea cell (1,0): -8 + 2 sea neighbours.
        assert_eq!(r[c(1, 0)], -6.0);
    }

    #[test]
    fn grid_border_is_not_coast() {
        let mask = Field2D::filled(3, 3, 1.0f32).unwrap();
        assert!(coastline_cells(&mask, 0.0).is_empty());
    }

    #[test]
    fn default_threshold_selects_any_sea_adjacent_land() {
        // A single sea cell touching (1,1) only diagonally.
        let mask = field(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ]);
        assert_eq!(
            coastline_cells(&mask, 0.0),
            vec![c(0, 1), c(1, 0), c(1, 1)]
        );
    }

    #[test]
    fn threshold_one_requires_two_non_land_neighbours() {
        let mask = field(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ]);
        assert!(coastline_cells(&mask, 1.0).is_empty());

        let mask = field(&[vec![0.0, 1.0, 1.0], vec![0.0, 1.0, 1.0]]);
        assert_eq!(coastline_cells(&mask, 1.0), vec![c(0, 1), c(1, 1)]);
    }

    #[test]
    fn nan_and_other_classes_count_as_non_land() {
        let mask = field(&[vec![MISSING, 1.0, 2.0]]);
        assert_eq!(coastline_cells(&mask, 0.0), vec![c(0, 1)]);
    }

    // ── Seeding ─────────────────────────────────────────────────

    #[test]
    fn edge_seeding_uses_coastline_and_normalizes_forcing() {
        let mask = field(&[vec![0.0, 1.0, 1.0]]);
        let forcing = field(&[vec![3.0, MISSING, f32::INFINITY]]);
        let s = seed(SeedStrategy::Edge, &forcing, &mask, 0.0).unwrap();
        assert_eq!(s.frontier, VecDeque::from(vec![c(0, 1)]));
        assert_eq!(
            s.level.as_slice(),
            &[3.0, f32::NEG_INFINITY, f32::NEG_INFINITY]
        );
    }

    #[test]
    fn boundary_seeding_uses_finite_forcing_cells() {
        let mask = field(&[vec![1.0, 1.0], vec![1.0, 1.0]]);
        let forcing = field(&[
            vec![MISSING, 2.0],
            vec![f32::NEG_INFINITY, 1.0],
        ]);
        let s = seed(SeedStrategy::Boundary, &forcing, &mask, 0.0).unwrap();
        assert_eq!(s.frontier, VecDeque::from(vec![c(0, 1), c(1, 1)]));
        assert_eq!(s.level[c(0, 0)], f32::NEG_INFINITY);
        assert_eq!(s.level[c(1, 1)], 1.0);
    }

    #[test]
    fn boundary_seeding_with_no_finite_forcing_is_empty() {
        let mask = field(&[vec![1.0, 1.0]]);
        let forcing = field(&[vec![MISSING, MISSING]]);
        let s = seed(SeedStrategy::Boundary, &forcing, &mask, 0.0).unwrap();
        assert!(s.frontier.is_empty());
    }

    #[test]
    fn edge_seeding_rejects_mask_shape_mismatch() {
        let mask = field(&[vec![1.0, 1.0]]);
        let forcing = field(&[vec![1.0], vec![1.0]]);
        assert!(seed(SeedStrategy::Edge, &forcing, &mask, 0.0).is_err());
    }

    #[test]
    fn strategy_names() {
        assert_eq!(SeedStrategy::Edge.as_str(), "edge");
        assert_eq!(SeedStrategy::Boundary.as_str(), "boundary");
        assert_eq!(SeedStrategy::default(), SeedStrategy::Edge);
    }
}
