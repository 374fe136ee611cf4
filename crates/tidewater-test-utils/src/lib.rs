//! Test utilities for Tidewater development.
//!
//! - [`grid`]: elevation/mask fixtures parsed from whitespace-separated
//!   text, plus the reference 5×5 scenario.
//! - [`coast`]: seeded random coastlines for property tests and benches.
//! - [`assert`]: field comparisons that treat `NaN` as a value.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assert;
pub mod coast;
pub mod grid;

pub use assert::{assert_field_close, assert_same_missing};
pub use coast::{random_coast, CoastParams};
pub use grid::{parse_grid, point_forcing, scenario_5x5, uniform_forcing, GridFixture, Scenario};
