//! Grid topology for Tidewater flood propagation.
//!
//! Flood water moves between grid cells along the eight compass directions.
//! [`Square8`] answers the only spatial questions the engine asks: which
//! cells neighbour a given cell, how many hops separate two cells, and how
//! cells map to flat buffer positions. The grid never wraps; cells beyond
//! the raster edge simply do not exist.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub(crate) mod grid2d;
pub mod square8;

pub use error::SpaceError;
pub use square8::Square8;
