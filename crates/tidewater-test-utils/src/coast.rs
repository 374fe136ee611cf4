//! Seeded random coastlines.
//!
//! Sea fills the left of each row up to a coastline column that wanders
//! by at most one cell per row. Land rises inland with `slope` per column
//! plus uniform jitter, and an optional share of cells is no-data. Same
//! seed, same grid.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tidewater_core::{Field2D, LAND, MISSING};

use crate::grid::{GridFixture, SEA};

/// Shape of a generated coast.
#[derive(Clone, Copy, Debug)]
pub struct CoastParams {
    pub rows: usize,
    pub cols: usize,
    /// Elevation gained per column inland from the coastline.
    pub slope: f32,
    /// Upper bound of the uniform elevation noise.
    pub jitter: f32,
    /// Probability that a cell is no-data.
    pub missing: f64,
}

impl Default for CoastParams {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            slope: 0.1,
            jitter: 0.5,
            missing: 0.0,
        }
    }
}

/// Generate a coast from `params` and `seed`.
pub fn random_coast(params: CoastParams, seed: u64) -> GridFixture {
    let CoastParams {
        rows,
        cols,
        slope,
        jitter,
        missing,
    } = params;
    assert!(rows > 0 && cols > 0, "coast must be non-empty");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let max_coast = cols / 2;
    let mut coast = cols / 4;
    let mut dem = Vec::with_capacity(rows * cols);
    let mut mask = Vec::with_capacity(rows * cols);
    for _ in 0..rows {
        let step: i64 = rng.random_range(-1..=1);
        coast = (coast as i64 + step).clamp(0, max_coast as i64) as usize;
        for col in 0..cols {
            if missing > 0.0 && rng.random_bool(missing) {
                dem.push(MISSING);
                mask.push(MISSING);
            } else if col < coast {
                dem.push(-rng.random::<f32>() * jitter);
                mask.push(SEA);
            } else {
                let inland = (col - coast) as f32;
                dem.push(inland * slope + rng.random::<f32>() * jitter);
                mask.push(LAND);
            }
        }
    }

    GridFixture {
        dem: Field2D::from_vec(rows, cols, dem).expect("buffer sized rows * cols"),
        mask: Field2D::from_vec(rows, cols, mask).expect("buffer sized rows * cols"),
    }
}
