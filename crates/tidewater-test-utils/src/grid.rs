//! Text-described grid fixtures.
//!
//! One line per row, whitespace-separated tokens:
//!
//! - a number: land at that elevation
//! - `~`: sea, elevation `0.0`
//! - `.`: no data, mask and elevation both missing
//! - `#2.5`: another non-land class (mask `2.0`) at that elevation
//!
//! ```text
//! ~ 1 2
//! ~ 0 9
//! ```

use tidewater_core::{Cell, Field2D, LAND, MISSING};

/// Mask value used for `~` cells.
pub const SEA: f32 = 0.0;

/// Mask value used for `#` cells.
pub const OTHER: f32 = 2.0;

/// An elevation field and the matching land/sea mask.
#[derive(Clone, Debug)]
pub struct GridFixture {
    pub dem: Field2D<f32>,
    pub mask: Field2D<f32>,
}

impl GridFixture {
    pub fn shape(&self) -> (usize, usize) {
        self.dem.shape()
    }
}

/// Parse a fixture. Panics on ragged rows or unknown tokens.
pub fn parse_grid(art: &str) -> GridFixture {
    let mut dem_rows = Vec::new();
    let mut mask_rows = Vec::new();
    for line in art.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (dem, mask): (Vec<f32>, Vec<f32>) = line.split_whitespace().map(parse_token).unzip();
        dem_rows.push(dem);
        mask_rows.push(mask);
    }
    GridFixture {
        dem: Field2D::from_rows(&dem_rows).expect("fixture rows must be equal length"),
        mask: Field2D::from_rows(&mask_rows).expect("fixture rows must be equal length"),
    }
}

fn parse_token(token: &str) -> (f32, f32) {
    match token {
        "~" => (0.0, SEA),
        "." => (MISSING, MISSING),
        _ => {
            if let Some(rest) = token.strip_prefix('#') {
                (parse_number(rest), OTHER)
            } else {
                (parse_number(token), LAND)
            }
        }
    }
}

fn parse_number(token: &str) -> f32 {
    token
        .parse()
        .unwrap_or_else(|_| panic!("bad fixture token {token:?}"))
}

/// A forcing field holding `value` everywhere.
pub fn uniform_forcing(shape: (usize, usize), value: f32) -> Field2D<f32> {
    Field2D::filled(shape.0, shape.1, value).expect("non-empty shape")
}

/// A forcing field that is missing except at `cell`.
pub fn point_forcing(shape: (usize, usize), cell: Cell, value: f32) -> Field2D<f32> {
    let mut f = Field2D::filled(shape.0, shape.1, MISSING).expect("non-empty shape");
    f[cell] = value;
    f
}

/// The reference scenario: a fixture, a point forcing, and its seed.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: GridFixture,
    pub forcing: Field2D<f32>,
    pub seed: Cell,
    pub seed_level: f32,
    pub attenuation: f32,
}

/// 5×5 grid, all land except column 1 which is sea. Elevations span
/// 0 to 10. A single seed at the sea-adjacent cell (2, 2) holds level 5,
/// and the attenuation is 1 per hop.
///
/// Column 0 is low land cut off from the seed by the sea column, so it
/// must stay dry.
pub fn scenario_5x5() -> Scenario {
    let grid = parse_grid(
        "
        0 ~ 1 2 9
        0 ~ 1 3 10
        0 ~ 0 2 4
        0 ~ 1 3 7
        0 ~ 2 3 6
        ",
    );
    let seed = Cell::new(2, 2);
    let forcing = point_forcing(grid.shape(), seed, 5.0);
    Scenario {
        grid,
        forcing,
        seed,
        seed_level: 5.0,
        attenuation: 1.0,
    }
}
