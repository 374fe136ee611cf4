//! Raster I/O errors.

use std::path::PathBuf;

use thiserror::Error;
use tidewater_core::FieldError;

/// Failure reading or writing a raster. Reads fail as a whole: no partial
/// field is ever returned.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The file could not be opened or created.
    #[error("cannot access {path}: {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The TIFF decoder or encoder failed.
    #[error("TIFF error in {path}: {message}")]
    Tiff {
        /// Offending path.
        path: PathBuf,
        /// Decoder or encoder message.
        message: String,
    },

    /// The image is not a single-band grid.
    #[error("{path}: unsupported sample layout {layout}")]
    UnsupportedLayout {
        /// Offending path.
        path: PathBuf,
        /// Decoder's description of the layout.
        layout: String,
    },

    /// The decoded buffer does not fit the declared dimensions.
    #[error("{path}: {source}")]
    Field {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: FieldError,
    },
}

impl RasterError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn tiff(path: &std::path::Path, e: tiff::TiffError) -> Self {
        Self::Tiff {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }
}
