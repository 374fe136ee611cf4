//! Tidewater: attenuated, connectivity-aware coastal flood modelling.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tidewater sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tidewater::prelude::*;
//!
//! // Sea in column 0, land rising inland.
//! let dem = Field2D::from_rows(&[vec![0.0, 0.5, 1.0, 3.0]]).unwrap();
//! let mask = Field2D::from_rows(&[vec![0.0, 1.0, 1.0, 1.0]]).unwrap();
//! // Water level known at sea and on the coast.
//! let forcing = Field2D::from_rows(&[vec![2.0, 2.0, MISSING, MISSING]]).unwrap();
//!
//! let config = FloodConfig::builder().attenuation(0.5).build().unwrap();
//! let outcome = run_flood(&FloodInputs::new(&dem, &mask, &forcing), &config).unwrap();
//!
//! assert_eq!(outcome.depth[Cell::new(0, 1)], 1.5);
//! assert_eq!(outcome.depth[Cell::new(0, 2)], 0.5);
//! assert!(outcome.depth[Cell::new(0, 3)].is_nan());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tidewater-core` | `Field2D`, `Cell`, sentinels, errors |
//! | [`space`] | `tidewater-space` | `Square8` grid topology |
//! | [`engine`] | `tidewater-engine` | classify, seed, propagate, depth, sweeps |
//! | [`raster`] | `tidewater-raster` | GeoTIFF reading and writing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid container, cell coordinates, and error types (`tidewater-core`).
pub use tidewater_core as types;

/// Bounded 8-connected grid topology (`tidewater-space`).
pub use tidewater_space as space;

/// The flood model (`tidewater-engine`).
///
/// [`engine::run_flood`] for one run, [`engine::run_sweep`] for several
/// attenuation factors, [`engine::FloodEngine`] to step by hand.
pub use tidewater_engine as engine;

/// Single-band GeoTIFF I/O (`tidewater-raster`).
pub use tidewater_raster as raster;

/// Common imports for typical Tidewater usage.
///
/// ```rust
/// use tidewater::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tidewater_core::{Cell, Field2D, LAND, MISSING};

    // Errors
    pub use tidewater_core::{ConfigError, FieldError, FloodError};

    // Space
    pub use tidewater_space::Square8;

    // Engine
    pub use tidewater_engine::{
        extract_depth, flood_map, run_flood, run_sweep, DepthSummary, EngineState, FloodConfig,
        FloodEngine, FloodInputs, FloodOutcome, PropagationMetrics, SeedStrategy, SweepConfig,
        SweepResult,
    };

    // Raster
    pub use tidewater_raster::{read_raster, write_mask, write_raster, GeoMetadata, RasterError};
}
