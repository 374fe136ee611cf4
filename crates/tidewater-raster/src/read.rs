//! Raster reading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tidewater_core::{Field2D, MISSING};
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::ColorType;
use tracing::debug;

use crate::error::RasterError;
use crate::meta::{
    tag, GeoMetadata, GDAL_NODATA, GEO_ASCII_PARAMS, GEO_DOUBLE_PARAMS, GEO_KEY_DIRECTORY,
    MODEL_PIXEL_SCALE, MODEL_TIEPOINT, MODEL_TRANSFORMATION,
};

/// A decoded single-band raster.
#[derive(Clone, Debug)]
pub struct Raster {
    /// Sample values as `f32`, nodata replaced by [`MISSING`].
    pub field: Field2D<f32>,
    /// Georeferencing tags, copied verbatim.
    pub meta: GeoMetadata,
    /// The file's declared nodata value, if any.
    pub nodata: Option<f64>,
}

/// Read a single-band TIFF of any integer or float sample type.
///
/// Samples equal to the GDAL nodata value become `NaN`. GeoTIFF tags are
/// captured when present; a plain TIFF reads with empty metadata. Image
/// size is unbounded; see [`read_raster_with_limits`] to cap it.
pub fn read_raster(path: impl AsRef<Path>) -> Result<Raster, RasterError> {
    read_raster_with_limits(path, Limits::unlimited())
}

/// [`read_raster`] with explicit decoder buffer limits.
///
/// An image whose decoded buffer exceeds `limits` fails with
/// [`RasterError::Tiff`].
pub fn read_raster_with_limits(
    path: impl AsRef<Path>,
    limits: Limits,
) -> Result<Raster, RasterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| RasterError::io(path, e))?;
    let mut decoder = Decoder::new(BufReader::new(file))
        .map_err(|e| RasterError::tiff(path, e))?
        .with_limits(limits);

    match decoder.colortype().map_err(|e| RasterError::tiff(path, e))? {
        ColorType::Gray(_) => {}
        other => {
            return Err(RasterError::UnsupportedLayout {
                path: path.to_path_buf(),
                layout: format!("{other:?}"),
            })
        }
    }
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| RasterError::tiff(path, e))?;

    let meta = GeoMetadata {
        pixel_scale: decoder.get_tag_f64_vec(tag(MODEL_PIXEL_SCALE)).ok(),
        tiepoint: decoder.get_tag_f64_vec(tag(MODEL_TIEPOINT)).ok(),
        transformation: decoder.get_tag_f64_vec(tag(MODEL_TRANSFORMATION)).ok(),
        key_directory: decoder.get_tag_u16_vec(tag(GEO_KEY_DIRECTORY)).ok(),
        double_params: decoder.get_tag_f64_vec(tag(GEO_DOUBLE_PARAMS)).ok(),
        ascii_params: decoder.get_tag_ascii_string(tag(GEO_ASCII_PARAMS)).ok(),
    };
    let nodata = decoder
        .get_tag_ascii_string(tag(GDAL_NODATA))
        .ok()
        .and_then(|s| parse_nodata(&s));

    let image = decoder
        .read_image()
        .map_err(|e| RasterError::tiff(path, e))?;
    let mut field = Field2D::from_vec(height as usize, width as usize, samples_to_f32(image))
        .map_err(|source| RasterError::Field {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(nd) = nodata.map(|v| v as f32).filter(|v| !v.is_nan()) {
        for v in field.as_mut_slice() {
            if *v == nd {
                *v = MISSING;
            }
        }
    }

    debug!(
        path = %path.display(),
        rows = field.rows(),
        cols = field.cols(),
        missing = field.missing_count(),
        georeferenced = !meta.is_empty(),
        "raster read"
    );
    Ok(Raster {
        field,
        meta,
        nodata,
    })
}

/// GDAL writes nodata as ASCII, sometimes NUL-terminated.
fn parse_nodata(s: &str) -> Option<f64> {
    s.trim_matches(char::from(0)).trim().parse().ok()
}

fn samples_to_f32(image: DecodingResult) -> Vec<f32> {
    match image {
        DecodingResult::U8(data) => data.into_iter().map(f32::from).collect(),
        DecodingResult::U16(data) => data.into_iter().map(f32::from).collect(),
        DecodingResult::U32(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U64(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::F32(data) => data,
        DecodingResult::F64(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I8(data) => data.into_iter().map(f32::from).collect(),
        DecodingResult::I16(data) => data.into_iter().map(f32::from).collect(),
        DecodingResult::I32(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I64(data) => data.into_iter().map(|v| v as f32).collect(),
    }
}
