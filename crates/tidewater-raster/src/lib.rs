//! Single-band GeoTIFF I/O.
//!
//! Reads elevation, mask, and forcing rasters into [`Field2D<f32>`] with
//! nodata normalized to `NaN`, and writes depth and flood-map results
//! back with the source raster's georeferencing tags. Georeferencing is
//! carried verbatim in [`GeoMetadata`]; nothing here reprojects.
//!
//! [`Field2D<f32>`]: tidewater_core::Field2D

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod meta;
pub mod read;
pub mod write;

pub use error::RasterError;
pub use meta::GeoMetadata;
pub use read::{read_raster, read_raster_with_limits, Raster};
pub use tiff::decoder::Limits;
pub use write::{write_mask, write_raster};
