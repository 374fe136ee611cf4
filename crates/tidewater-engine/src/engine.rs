//! The flood propagation engine.
//!
//! A label-correcting breadth-first relaxation over the 8-connected grid.
//! Each [`step`](FloodEngine::step) pops one cell from a FIFO frontier and
//! offers every in-bounds neighbour the popped cell's level minus the
//! attenuation factor. A neighbour accepts the offer only if
//!
//! ```text
//! floodable[n] && dem[n] < candidate && candidate > level[n]
//! ```
//!
//! and is then pushed back onto the frontier. Cells may be revisited and
//! re-improved; the queue is never deduplicated, because a stale entry
//! fails the guard and costs nothing. When the frontier drains, every cell
//! holds the highest `seed_level - attenuation * hops` over all connected
//! floodable paths from any seed.
//!
//! Termination: levels only ever increase, and are bounded above by the
//! highest seed level, so the number of accepted relaxations is finite.
//!
//! Non-finite values never contaminate the field: a `-inf` source yields a
//! `-inf` candidate and `NaN` elevations compare false, so both fail the
//! guard.

use std::collections::VecDeque;
use std::time::Instant;

use tidewater_core::{Cell, ConfigError, Field2D, FloodError};
use tidewater_space::{SpaceError, Square8};
use tracing::{debug, info};

use crate::metrics::PropagationMetrics;
use crate::seed::Seeding;

/// Lifecycle of a propagation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// The frontier holds at least one cell.
    Active,
    /// The frontier is empty; the level field is at its fixed point.
    Converged,
}

/// What a single [`FloodEngine::step`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// The cell popped from the frontier.
    pub cell: Cell,
    /// Level offered to its neighbours (`level[cell] - attenuation`).
    pub candidate: f32,
    /// How many neighbours accepted the offer.
    pub relaxed: usize,
}

/// Owns the mutable state of one propagation run: the water-level field,
/// the floodable set, and the frontier queue.
///
/// Each run gets a fresh engine; nothing is shared between runs, so
/// independent runs can execute on separate threads.
#[derive(Debug)]
pub struct FloodEngine<'a> {
    grid: Square8,
    dem: &'a Field2D<f32>,
    floodable: Field2D<bool>,
    level: Field2D<f32>,
    frontier: VecDeque<Cell>,
    attenuation: f32,
    metrics: PropagationMetrics,
}

impl<'a> FloodEngine<'a> {
    /// Assemble an engine from a classified grid and a seeding.
    ///
    /// # Errors
    ///
    /// - `FloodError::ShapeMismatch` if `floodable` or the seeded level
    ///   field differs in shape from `dem`
    /// - `FloodError::SeedOutOfBounds` if a frontier cell is off the grid
    /// - `FloodError::Config` if `attenuation` is negative or not finite
    pub fn new(
        dem: &'a Field2D<f32>,
        floodable: Field2D<bool>,
        seeding: Seeding,
        attenuation: f32,
    ) -> Result<Self, FloodError> {
        if !attenuation.is_finite() || attenuation < 0.0 {
            return Err(ConfigError::InvalidAttenuation { value: attenuation }.into());
        }
        check_shape("floodable", dem, &floodable)?;
        check_shape("level", dem, &seeding.level)?;
        let grid = Square8::for_field(dem);
        for &cell in &seeding.frontier {
            if let Err(SpaceError::CellOutOfBounds { cell, bounds }) = grid.check_bounds(cell) {
                return Err(FloodError::SeedOutOfBounds { cell, bounds });
            }
        }

        let metrics = PropagationMetrics {
            seeds: seeding.frontier.len(),
            peak_frontier: seeding.frontier.len(),
            ..Default::default()
        };
        debug!(
            seeds = metrics.seeds,
            floodable = floodable.count(|&f| f),
            attenuation,
            "flood engine seeded"
        );

        Ok(Self {
            grid,
            dem,
            floodable,
            level: seeding.level,
            frontier: seeding.frontier,
            attenuation,
            metrics,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        if self.frontier.is_empty() {
            EngineState::Converged
        } else {
            EngineState::Active
        }
    }

    /// Pop one cell and relax its neighbours.
    ///
    /// Returns `None` once the engine has converged. A step that relaxes
    /// nothing is a normal no-op, not a fault.
    pub fn step(&mut self) -> Option<StepReport> {
        let cell = self.frontier.pop_front()?;
        self.metrics.dequeues += 1;

        let candidate = self.level[cell] - self.attenuation;
        let mut relaxed = 0usize;
        for n in self.grid.neighbours(cell) {
            if self.floodable[n] && self.dem[n] < candidate && candidate > self.level[n] {
                self.level[n] = candidate;
                self.frontier.push_back(n);
                relaxed += 1;
            } else {
                self.metrics.rejected += 1;
            }
        }

        if relaxed > 0 {
            self.metrics.productive_dequeues += 1;
            self.metrics.relaxations += relaxed as u64;
            self.metrics.peak_frontier = self.metrics.peak_frontier.max(self.frontier.len());
        }

        Some(StepReport {
            cell,
            candidate,
            relaxed,
        })
    }

    /// Step until the frontier drains and return the run's metrics.
    pub fn run(&mut self) -> PropagationMetrics {
        let start = Instant::now();
        while self.step().is_some() {}
        self.metrics.elapsed_us += start.elapsed().as_micros() as u64;

        info!(
            attenuation = self.attenuation,
            seeds = self.metrics.seeds,
            dequeues = self.metrics.dequeues,
            relaxations = self.metrics.relaxations,
            peak_frontier = self.metrics.peak_frontier,
            elapsed_us = self.metrics.elapsed_us,
            "flood propagation converged"
        );
        self.metrics.clone()
    }

    /// The water-level field in its current state.
    pub fn level(&self) -> &Field2D<f32> {
        &self.level
    }

    /// The floodable set this run was classified with.
    pub fn floodable(&self) -> &Field2D<bool> {
        &self.floodable
    }

    /// Cells currently awaiting examination, including stale entries.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Per-hop attenuation of this run.
    pub fn attenuation(&self) -> f32 {
        self.attenuation
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &PropagationMetrics {
        &self.metrics
    }

    /// Consume the engine and return the water-level field.
    pub fn into_level(self) -> Field2D<f32> {
        self.level
    }
}

fn check_shape<T>(field: &'static str, dem: &Field2D<f32>, other: &Field2D<T>) -> Result<(), FloodError> {
    if dem.same_shape(other) {
        Ok(())
    } else {
        Err(FloodError::ShapeMismatch {
            field,
            expected: dem.shape(),
            actual: other.shape(),
        })
    }
}
