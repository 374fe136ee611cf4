//! Core types for the Tidewater coastal flood model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! dense grid container every other crate exchanges ([`Field2D`]), the
//! [`Cell`] coordinate, the missing-value and land sentinels, and the
//! error types raised before a propagation run starts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod field;

pub use cell::Cell;
pub use error::{ConfigError, FieldError, FloodError};
pub use field::{Field2D, LAND, MISSING};
