//! Benchmark profiles for the Tidewater flood model.
//!
//! - [`reference_profile`]: 100x100 coast (10K cells)
//! - [`stress_profile`]: 316x316 coast (~100K cells)
//!
//! Both use a seeded random coastline with forcing defined on the sea, so
//! boundary-seeded runs start from every sea cell.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tidewater_core::{Field2D, MISSING};
use tidewater_engine::FloodInputs;
use tidewater_test_utils::grid::SEA;
use tidewater_test_utils::{random_coast, CoastParams, GridFixture};

/// Forcing level used by the profiles.
pub const PROFILE_SURGE: f32 = 2.0;

/// Inputs owned by a benchmark.
pub struct Profile {
    pub grid: GridFixture,
    pub forcing: Field2D<f32>,
}

impl Profile {
    /// Borrow the profile as engine inputs.
    pub fn inputs(&self) -> FloodInputs<'_> {
        FloodInputs::new(&self.grid.dem, &self.grid.mask, &self.forcing)
    }
}

fn profile(rows: usize, cols: usize, seed: u64) -> Profile {
    let grid = random_coast(
        CoastParams {
            rows,
            cols,
            slope: 0.02,
            jitter: 0.3,
            missing: 0.0,
        },
        seed,
    );
    let forcing = grid
        .mask
        .map(|&m| if m == SEA { PROFILE_SURGE } else { MISSING });
    Profile { grid, forcing }
}

/// 100x100 coast (10K cells).
pub fn reference_profile(seed: u64) -> Profile {
    profile(100, 100, seed)
}

/// 316x316 coast (~100K cells).
pub fn stress_profile(seed: u64) -> Profile {
    profile(316, 316, seed)
}
