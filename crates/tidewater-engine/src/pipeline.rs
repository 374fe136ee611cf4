//! One complete flood run: validate, classify, seed, propagate, extract.

use tidewater_core::{Field2D, FloodError};
use tracing::debug;

use crate::classify::floodable_cells;
use crate::config::FloodConfig;
use crate::depth::{extract_depth, DepthSummary};
use crate::engine::FloodEngine;
use crate::metrics::PropagationMetrics;
use crate::seed::seed;

/// The three read-only input fields of a run.
///
/// Borrowed, so a sweep can share one set of inputs across many runs.
#[derive(Clone, Copy, Debug)]
pub struct FloodInputs<'a> {
    /// Elevation.
    pub dem: &'a Field2D<f32>,
    /// Land/sea mask; `1.0` is land.
    pub mask: &'a Field2D<f32>,
    /// Forcing water level.
    pub forcing: &'a Field2D<f32>,
}

impl<'a> FloodInputs<'a> {
    /// Bundle three fields.
    pub fn new(dem: &'a Field2D<f32>, mask: &'a Field2D<f32>, forcing: &'a Field2D<f32>) -> Self {
        Self { dem, mask, forcing }
    }

    /// Check that `mask` and `forcing` match the elevation field's shape.
    ///
    /// Reports the first offending field, mask before forcing.
    pub fn validate_shapes(&self) -> Result<(), FloodError> {
        for (field, shape) in [("mask", self.mask.shape()), ("forcing", self.forcing.shape())] {
            if shape != self.dem.shape() {
                return Err(FloodError::ShapeMismatch {
                    field,
                    expected: self.dem.shape(),
                    actual: shape,
                });
            }
        }
        Ok(())
    }
}

/// Everything a completed run produces.
#[derive(Clone, Debug)]
pub struct FloodOutcome {
    /// Flood depth; [`MISSING`](tidewater_core::MISSING) where dry.
    pub depth: Field2D<f32>,
    /// Converged water level, `-inf` where never reached.
    pub level: Field2D<f32>,
    /// Queue activity and timing.
    pub metrics: PropagationMetrics,
    /// Depth statistics.
    pub summary: DepthSummary,
}

/// Validate, classify, seed, and start an engine without running it.
///
/// Useful for stepping a run by hand; [`run_flood`] is the one-shot path.
pub fn prepare_engine<'a>(
    inputs: &FloodInputs<'a>,
    config: &FloodConfig,
) -> Result<FloodEngine<'a>, FloodError> {
    config.validate()?;
    inputs.validate_shapes()?;

    let floodable = floodable_cells(inputs.dem, inputs.forcing, inputs.mask)?;
    let seeding = seed(
        config.strategy,
        inputs.forcing,
        inputs.mask,
        config.coastline_threshold,
    )?;
    debug!(
        strategy = config.strategy.as_str(),
        seeds = seeding.frontier.len(),
        "frontier seeded"
    );
    FloodEngine::new(inputs.dem, floodable, seeding, config.attenuation)
}

/// Run one flood propagation to convergence and extract depth.
///
/// # Errors
///
/// - `FloodError::Config` if `config` fails validation
/// - `FloodError::ShapeMismatch` if the inputs disagree in shape
///
/// Degenerate inputs (no land, no finite forcing, no seeds) are not
/// errors; they yield an all-missing depth field.
pub fn run_flood(inputs: &FloodInputs<'_>, config: &FloodConfig) -> Result<FloodOutcome, FloodError> {
    let mut engine = prepare_engine(inputs, config)?;
    let metrics = engine.run();
    let level = engine.into_level();
    let depth = extract_depth(&level, inputs.dem, inputs.mask)?;
    let summary = DepthSummary::of(&depth);
    debug!(
        attenuation = config.attenuation,
        flooded = summary.flooded_cells,
        max_depth = summary.max_depth,
        "depth extracted"
    );
    Ok(FloodOutcome {
        depth,
        level,
        metrics,
        summary,
    })
}
