//! Raster writing.
//!
//! Outputs are uncompressed single-band TIFFs carrying the input's
//! georeferencing tags and a GDAL nodata tag.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use tidewater_core::Field2D;
use tiff::encoder::{colortype, DirectoryEncoder, TiffEncoder, TiffKind};
use tiff::TiffResult;
use tracing::debug;

use crate::error::RasterError;
use crate::meta::{
    tag, GeoMetadata, GDAL_NODATA, GEO_ASCII_PARAMS, GEO_DOUBLE_PARAMS, GEO_KEY_DIRECTORY,
    MODEL_PIXEL_SCALE, MODEL_TIEPOINT, MODEL_TRANSFORMATION,
};

/// Write a Float32 raster with nodata `NaN`.
pub fn write_raster(
    path: impl AsRef<Path>,
    meta: &GeoMetadata,
    field: &Field2D<f32>,
) -> Result<(), RasterError> {
    let path = path.as_ref();
    let (width, height) = tiff_dimensions(path, field.shape())?;
    let file = File::create(path).map_err(|e| RasterError::io(path, e))?;
    let mut encoder =
        TiffEncoder::new(BufWriter::new(file)).map_err(|e| RasterError::tiff(path, e))?;
    let mut image = encoder
        .new_image::<colortype::Gray32Float>(width, height)
        .map_err(|e| RasterError::tiff(path, e))?;
    write_geo_tags(image.encoder(), meta, Some("nan")).map_err(|e| RasterError::tiff(path, e))?;
    image
        .write_data(field.as_slice())
        .map_err(|e| RasterError::tiff(path, e))?;

    debug!(path = %path.display(), rows = field.rows(), cols = field.cols(), "raster written");
    Ok(())
}

/// Write an 8-bit raster, such as a flood map, with an optional nodata
/// value.
pub fn write_mask(
    path: impl AsRef<Path>,
    meta: &GeoMetadata,
    field: &Field2D<u8>,
    nodata: Option<u8>,
) -> Result<(), RasterError> {
    let path = path.as_ref();
    let (width, height) = tiff_dimensions(path, field.shape())?;
    let file = File::create(path).map_err(|e| RasterError::io(path, e))?;
    let mut encoder =
        TiffEncoder::new(BufWriter::new(file)).map_err(|e| RasterError::tiff(path, e))?;
    let mut image = encoder
        .new_image::<colortype::Gray8>(width, height)
        .map_err(|e| RasterError::tiff(path, e))?;
    let nodata = nodata.map(|v| v.to_string());
    write_geo_tags(image.encoder(), meta, nodata.as_deref())
        .map_err(|e| RasterError::tiff(path, e))?;
    image
        .write_data(field.as_slice())
        .map_err(|e| RasterError::tiff(path, e))?;

    debug!(path = %path.display(), rows = field.rows(), cols = field.cols(), "mask written");
    Ok(())
}

fn tiff_dimensions(path: &Path, (rows, cols): (usize, usize)) -> Result<(u32, u32), RasterError> {
    match (u32::try_from(cols), u32::try_from(rows)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RasterError::UnsupportedLayout {
            path: path.to_path_buf(),
            layout: format!("{rows}x{cols} exceeds TIFF dimensions"),
        }),
    }
}

fn write_geo_tags<W: Write + Seek, K: TiffKind>(
    dir: &mut DirectoryEncoder<'_, W, K>,
    meta: &GeoMetadata,
    nodata: Option<&str>,
) -> TiffResult<()> {
    if let Some(v) = &meta.pixel_scale {
        dir.write_tag(tag(MODEL_PIXEL_SCALE), &v[..])?;
    }
    if let Some(v) = &meta.tiepoint {
        dir.write_tag(tag(MODEL_TIEPOINT), &v[..])?;
    }
    if let Some(v) = &meta.transformation {
        dir.write_tag(tag(MODEL_TRANSFORMATION), &v[..])?;
    }
    if let Some(v) = &meta.key_directory {
        dir.write_tag(tag(GEO_KEY_DIRECTORY), &v[..])?;
    }
    if let Some(v) = &meta.double_params {
        dir.write_tag(tag(GEO_DOUBLE_PARAMS), &v[..])?;
    }
    if let Some(s) = &meta.ascii_params {
        dir.write_tag(tag(GEO_ASCII_PARAMS), s.as_str())?;
    }
    if let Some(s) = nodata {
        dir.write_tag(tag(GDAL_NODATA), s)?;
    }
    Ok(())
}
