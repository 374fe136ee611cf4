//! Output file naming.
//!
//! One depth raster per attenuation factor, keyed by the factor so reruns
//! can skip work already on disk.

use std::path::{Path, PathBuf};

/// Factor as it appears in file names: shortest decimal form with `.`
/// replaced by `p`, so `0.01` becomes `0p01` and `0` stays `0`.
pub fn factor_tag(factor: f32) -> String {
    factor.to_string().replace('.', "p")
}

/// Paths written for one factor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub depth: PathBuf,
    pub flood_map: PathBuf,
}

impl OutputPaths {
    /// `{dir}/{prefix}_{tag}.tif` and `{dir}/{prefix}_{tag}_map.tif`.
    pub fn new(dir: &Path, prefix: &str, factor: f32) -> Self {
        let tag = factor_tag(factor);
        Self {
            depth: dir.join(format!("{prefix}_{tag}.tif")),
            flood_map: dir.join(format!("{prefix}_{tag}_map.tif")),
        }
    }

    /// Whether every output this run would write already exists.
    pub fn complete(&self, with_map: bool) -> bool {
        self.depth.exists() && (!with_map || self.flood_map.exists())
    }
}
