//! GeoTIFF georeferencing tags.

use tiff::tags::Tag;

/// ModelPixelScaleTag: `[sx, sy, sz]`.
pub const MODEL_PIXEL_SCALE: u16 = 33550;
/// ModelTiepointTag: `[i, j, k, x, y, z, ...]`.
pub const MODEL_TIEPOINT: u16 = 33922;
/// ModelTransformationTag: row-major 4×4 affine matrix.
pub const MODEL_TRANSFORMATION: u16 = 34264;
/// GeoKeyDirectoryTag.
pub const GEO_KEY_DIRECTORY: u16 = 34735;
/// GeoDoubleParamsTag.
pub const GEO_DOUBLE_PARAMS: u16 = 34736;
/// GeoAsciiParamsTag.
pub const GEO_ASCII_PARAMS: u16 = 34737;
/// GDAL_NODATA, an ASCII rendering of the nodata value.
pub const GDAL_NODATA: u16 = 42113;

/// Tag lookup that resolves to the named variant when the decoder knows
/// one, so lookups match whatever the IFD parser stored.
pub(crate) fn tag(code: u16) -> Tag {
    Tag::from_u16_exhaustive(code)
}

/// Georeferencing carried from an input raster to the outputs.
///
/// Opaque to the flood model: values are copied tag-for-tag and never
/// interpreted beyond [`geotransform`](Self::geotransform).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoMetadata {
    /// ModelPixelScaleTag.
    pub pixel_scale: Option<Vec<f64>>,
    /// ModelTiepointTag.
    pub tiepoint: Option<Vec<f64>>,
    /// ModelTransformationTag.
    pub transformation: Option<Vec<f64>>,
    /// GeoKeyDirectoryTag, the projection definition.
    pub key_directory: Option<Vec<u16>>,
    /// GeoDoubleParamsTag.
    pub double_params: Option<Vec<f64>>,
    /// GeoAsciiParamsTag.
    pub ascii_params: Option<String>,
}

impl GeoMetadata {
    /// Whether no georeferencing tag is present.
    pub fn is_empty(&self) -> bool {
        self.pixel_scale.is_none()
            && self.tiepoint.is_none()
            && self.transformation.is_none()
            && self.key_directory.is_none()
            && self.double_params.is_none()
            && self.ascii_params.is_none()
    }

    /// Affine geotransform in GDAL order
    /// `[origin_x, pixel_w, row_rot, origin_y, col_rot, pixel_h]`.
    ///
    /// Taken from the transformation matrix when present, otherwise from
    /// the first tiepoint and the pixel scale. `None` if neither form is
    /// complete.
    pub fn geotransform(&self) -> Option<[f64; 6]> {
        if let Some(m) = self.transformation.as_deref().filter(|m| m.len() >= 8) {
            return Some([m[3], m[0], m[1], m[7], m[4], m[5]]);
        }
        let tp = self.tiepoint.as_deref().filter(|t| t.len() >= 6)?;
        let scale = self.pixel_scale.as_deref().filter(|s| s.len() >= 2)?;
        let (sx, sy) = (scale[0], scale[1]);
        Some([tp[3] - tp[0] * sx, sx, 0.0, tp[4] + tp[1] * sy, 0.0, -sy])
    }
}
