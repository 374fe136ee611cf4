//! Run configuration and validation.
//!
//! [`FloodConfig`] holds the parameters of one propagation run;
//! [`SweepConfig`] describes a batch of independent runs over several
//! attenuation factors. Both are validated before any grid work starts.

use tidewater_core::ConfigError;

use crate::seed::SeedStrategy;

/// Attenuation applied per hop when none is configured.
pub const DEFAULT_ATTENUATION: f32 = 0.02;

// ── FloodConfig ────────────────────────────────────────────────────

/// Parameters for a single flood propagation run.
#[derive(Clone, Debug, PartialEq)]
pub struct FloodConfig {
    /// Water-level loss per propagation hop. Default: 0.02.
    pub attenuation: f32,
    /// How the initial frontier and water level are built. Default: Edge.
    pub strategy: SeedStrategy,
    /// Coastline kernel response a land cell must exceed to seed the
    /// frontier under [`SeedStrategy::Edge`]. Default: 0.0, meaning any
    /// land cell with at least one non-land neighbour.
    pub coastline_threshold: f32,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            attenuation: DEFAULT_ATTENUATION,
            strategy: SeedStrategy::Edge,
            coastline_threshold: 0.0,
        }
    }
}

impl FloodConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> FloodConfigBuilder {
        FloodConfigBuilder {
            config: Self::default(),
        }
    }

    /// A copy of this configuration with a different attenuation factor.
    pub fn with_attenuation(&self, attenuation: f32) -> Self {
        Self {
            attenuation,
            ..self.clone()
        }
    }

    /// Check all parameter invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.attenuation.is_finite() || self.attenuation < 0.0 {
            return Err(ConfigError::InvalidAttenuation {
                value: self.attenuation,
            });
        }
        if !self.coastline_threshold.is_finite() || self.coastline_threshold < 0.0 {
            return Err(ConfigError::InvalidCoastlineThreshold {
                value: self.coastline_threshold,
            });
        }
        Ok(())
    }
}

/// Builder for [`FloodConfig`].
pub struct FloodConfigBuilder {
    config: FloodConfig,
}

impl FloodConfigBuilder {
    /// Set the per-hop attenuation factor.
    pub fn attenuation(mut self, attenuation: f32) -> Self {
        self.config.attenuation = attenuation;
        self
    }

    /// Set the seeding strategy.
    pub fn strategy(mut self, strategy: SeedStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the coastline kernel threshold.
    pub fn coastline_threshold(mut self, threshold: f32) -> Self {
        self.config.coastline_threshold = threshold;
        self
    }

    /// Build the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `attenuation` is negative, NaN, or infinite
    /// - `coastline_threshold` is negative, NaN, or infinite
    pub fn build(self) -> Result<FloodConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// ── SweepConfig ────────────────────────────────────────────────────

/// A batch of independent runs, one per attenuation factor.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Attenuation factors to run, in output order.
    pub factors: Vec<f32>,
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub workers: Option<usize>,
}

impl SweepConfig {
    /// A sweep over `factors` with auto-detected worker count.
    pub fn new(factors: Vec<f32>) -> Self {
        Self {
            factors,
            workers: None,
        }
    }

    /// Check that the sweep is runnable. Individual factors are validated
    /// through [`FloodConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factors.is_empty() {
            return Err(ConfigError::NoFactors);
        }
        if self.workers == Some(0) {
            return Err(ConfigError::InvalidWorkerCount);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`. Never exceeds the number
    /// of factors, since each worker handles whole runs.
    pub fn resolved_worker_count(&self) -> usize {
        let n = match self.workers {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        };
        n.min(self.factors.len().max(1))
    }
}
