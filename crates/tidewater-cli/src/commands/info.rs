//! `tidewater info`: describe an input raster.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tidewater_raster::read_raster;

/// Arguments for `info`
#[derive(Args)]
pub struct InfoArgs {
    /// Raster to describe
    pub path: PathBuf,
}

/// Execute `info`
pub fn execute(args: InfoArgs) -> Result<()> {
    let raster = read_raster(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let field = &raster.field;

    println!("{}", args.path.display());
    println!("  size:      {} rows x {} cols", field.rows(), field.cols());
    match raster.nodata {
        Some(v) => println!("  nodata:    {v}"),
        None => println!("  nodata:    none"),
    }
    println!(
        "  valid:     {} of {} ({} missing)",
        field.finite_count(),
        field.len(),
        field.missing_count()
    );
    if let Some(max) = field.max_finite() {
        let min = field
            .as_slice()
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(max, f32::min);
        println!("  range:     {min} .. {max}");
    }
    match raster.meta.geotransform() {
        Some(gt) => println!("  transform: {gt:?}"),
        None => println!("  transform: none"),
    }
    if let Some(crs) = &raster.meta.ascii_params {
        println!("  crs:       {}", crs.trim_end_matches(['|', '\0']));
    }
    Ok(())
}
