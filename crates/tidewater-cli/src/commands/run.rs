//! `tidewater run`: one depth raster per attenuation factor.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tidewater_engine::{
    flood_map, run_sweep, FloodConfig, FloodInputs, SeedStrategy, SweepConfig,
    DEFAULT_ATTENUATION, NOT_FLOODED,
};
use tidewater_raster::{read_raster, write_mask, write_raster};
use tracing::{info, warn};

use crate::output::OutputPaths;

/// How the initial frontier is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Land cells on the coastline detected in the mask
    Edge,
    /// Every cell where the forcing raster is finite
    Boundary,
}

impl From<StrategyArg> for SeedStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Edge => SeedStrategy::Edge,
            StrategyArg::Boundary => SeedStrategy::Boundary,
        }
    }
}

/// Arguments for `run`
#[derive(Args)]
pub struct RunArgs {
    /// Elevation raster
    #[arg(long)]
    pub dem: PathBuf,

    /// Land/sea mask raster (1 = land)
    #[arg(long)]
    pub mask: PathBuf,

    /// Forcing water-level raster
    #[arg(long)]
    pub forcing: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    pub out_dir: PathBuf,

    /// Output file name prefix
    #[arg(long, default_value = "flood_depth")]
    pub prefix: String,

    /// Attenuation per hop; repeat for a sweep
    #[arg(short, long, default_values_t = [DEFAULT_ATTENUATION])]
    pub attenuation: Vec<f32>,

    /// Seeding strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Edge)]
    pub strategy: StrategyArg,

    /// Coastline kernel response a land cell must exceed to seed
    #[arg(long, default_value_t = 0.0)]
    pub coastline_threshold: f32,

    /// Also write a binary flood map next to each depth raster
    #[arg(long)]
    pub flood_map: bool,

    /// Recompute factors whose outputs already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Worker threads for the sweep (default: available parallelism)
    #[arg(short, long)]
    pub workers: Option<usize>,
}

/// Factors that still need computing, in the order given.
fn pending_factors(args: &RunArgs) -> Vec<f32> {
    let mut pending = Vec::new();
    for &factor in &args.attenuation {
        if pending.contains(&factor) {
            continue;
        }
        let paths = OutputPaths::new(&args.out_dir, &args.prefix, factor);
        if !args.overwrite && paths.complete(args.flood_map) {
            info!(path = %paths.depth.display(), "output exists, skipping");
            continue;
        }
        pending.push(factor);
    }
    pending
}

/// Execute `run`
pub fn execute(args: RunArgs) -> Result<()> {
    let base = FloodConfig::builder()
        .strategy(args.strategy.into())
        .coastline_threshold(args.coastline_threshold)
        .build()
        .context("invalid flood configuration")?;

    let factors = pending_factors(&args);
    if factors.is_empty() {
        info!("all outputs present, nothing to do");
        return Ok(());
    }

    let start = Instant::now();
    let dem = read_raster(&args.dem).context("reading elevation raster")?;
    let mask = read_raster(&args.mask).context("reading mask raster")?;
    let forcing = read_raster(&args.forcing).context("reading forcing raster")?;
    if dem.field.finite_count() == 0 {
        warn!(path = %args.dem.display(), "elevation raster has no valid cells");
    }
    info!(
        rows = dem.field.rows(),
        cols = dem.field.cols(),
        forcing_max = forcing.field.max_finite(),
        "inputs loaded"
    );

    let inputs = FloodInputs::new(&dem.field, &mask.field, &forcing.field);
    let sweep = SweepConfig {
        factors,
        workers: args.workers,
    };
    let results = run_sweep(&inputs, &base, &sweep).context("flood propagation failed")?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for result in &results {
        let paths = OutputPaths::new(&args.out_dir, &args.prefix, result.attenuation);
        write_raster(&paths.depth, &dem.meta, &result.outcome.depth)
            .with_context(|| format!("writing {}", paths.depth.display()))?;
        if args.flood_map {
            let map = flood_map(&result.outcome.depth);
            write_mask(&paths.flood_map, &dem.meta, &map, Some(NOT_FLOODED))
                .with_context(|| format!("writing {}", paths.flood_map.display()))?;
        }
        let summary = result.outcome.summary;
        info!(
            attenuation = result.attenuation,
            flooded = summary.flooded_cells,
            max_depth = summary.max_depth,
            mean_depth = summary.mean_depth,
            path = %paths.depth.display(),
            "finished"
        );
    }

    info!(
        runs = results.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_core::{Field2D, MISSING};
    use tidewater_raster::GeoMetadata;

    fn args(out_dir: PathBuf, attenuation: Vec<f32>) -> RunArgs {
        RunArgs {
            dem: PathBuf::from("dem.tif"),
            mask: PathBuf::from("mask.tif"),
            forcing: PathBuf::from("slr.tif"),
            out_dir,
            prefix: "flood_depth".to_string(),
            attenuation,
            strategy: StrategyArg::Edge,
            coastline_threshold: 0.0,
            flood_map: false,
            overwrite: false,
            workers: None,
        }
    }

    #[test]
    fn strategy_maps_to_engine() {
        assert_eq!(SeedStrategy::from(StrategyArg::Edge), SeedStrategy::Edge);
        assert_eq!(SeedStrategy::from(StrategyArg::Boundary), SeedStrategy::Boundary);
    }

    #[test]
    fn existing_outputs_are_skipped_unless_overwrite() {
        let dir = std::env::temp_dir().join(format!("tidewater-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("flood_depth_0p01.tif"), b"").unwrap();

        let mut a = args(dir.clone(), vec![0.0, 0.01, 0.1]);
        assert_eq!(pending_factors(&a), vec![0.0, 0.1]);
        a.overwrite = true;
        assert_eq!(pending_factors(&a), vec![0.0, 0.01, 0.1]);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn duplicate_factors_run_once() {
        let dir = std::env::temp_dir().join("tidewater-run-duplicates-absent");
        let a = args(dir, vec![0.1, 0.1, 0.2]);
        assert_eq!(pending_factors(&a), vec![0.1, 0.2]);
    }

    #[test]
    fn all_missing_dem_writes_all_missing_depth() {
        let dir = std::env::temp_dir().join(format!("tidewater-run-nodem-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let nan = Field2D::filled(3, 3, MISSING).unwrap();
        let ones = Field2D::filled(3, 3, 1.0f32).unwrap();
        let mut a = args(dir.join("out"), vec![0.1]);
        a.dem = dir.join("dem.tif");
        a.mask = dir.join("mask.tif");
        a.forcing = dir.join("slr.tif");
        write_raster(&a.dem, &GeoMetadata::default(), &nan).unwrap();
        write_raster(&a.mask, &GeoMetadata::default(), &ones).unwrap();
        write_raster(&a.forcing, &GeoMetadata::default(), &ones).unwrap();

        execute(a).unwrap();
        let depth = read_raster(dir.join("out").join("flood_depth_0p1.tif")).unwrap();
        assert_eq!(depth.field.missing_count(), 9);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_inputs_fail_with_context() {
        let dir = std::env::temp_dir().join(format!("tidewater-run-missing-{}", std::process::id()));
        let err = execute(args(dir, vec![0.1])).unwrap_err();
        assert!(format!("{err:#}").contains("reading elevation raster"));
    }
}
