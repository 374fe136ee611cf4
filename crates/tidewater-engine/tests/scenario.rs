//! End-to-end runs over the reference 5×5 coast.
//!
//! ```text
//!   0 ~ 1 2 9
//!   0 ~ 1 3 10
//!   0 ~ 0 2 4      seed (2,2) at level 5, attenuation 1
//!   0 ~ 1 3 7
//!   0 ~ 2 3 6
//! ```

use tidewater_core::{Cell, Field2D, MISSING};
use tidewater_engine::{
    flood_map, run_flood, FloodConfig, FloodInputs, SeedStrategy, FLOODED, NOT_FLOODED,
};
use tidewater_space::Square8;
use tidewater_test_utils::{assert_field_close, scenario_5x5};

const N: f32 = MISSING;

fn boundary_config(attenuation: f32) -> FloodConfig {
    FloodConfig::builder()
        .strategy(SeedStrategy::Boundary)
        .attenuation(attenuation)
        .build()
        .unwrap()
}

// ── Boundary-seeded point source ────────────────────────────────

#[test]
fn point_seed_depth_matches_hand_computation() {
    let s = scenario_5x5();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &s.forcing);
    let out = run_flood(&inputs, &boundary_config(s.attenuation)).unwrap();

    let expected = Field2D::from_rows(&[
        vec![N, N, 2.0, 1.0, N],
        vec![N, N, 3.0, 1.0, N],
        vec![N, N, 5.0, 2.0, N],
        vec![N, N, 3.0, 1.0, N],
        vec![N, N, 1.0, N, N],
    ])
    .unwrap();
    assert_field_close(&out.depth, &expected, 1e-6);
}

#[test]
fn level_drops_one_per_hop_from_seed() {
    let s = scenario_5x5();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &s.forcing);
    let out = run_flood(&inputs, &boundary_config(s.attenuation)).unwrap();
    let grid = Square8::for_field(&s.grid.dem);

    for (cell, &level) in out.level.iter_cells() {
        if !level.is_finite() {
            continue;
        }
        let hops = grid.distance(s.seed, cell) as f32;
        assert_eq!(level, s.seed_level - s.attenuation * hops, "level at {cell}");
    }
}

#[test]
fn cells_above_decayed_level_stay_dry() {
    let s = scenario_5x5();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &s.forcing);
    let out = run_flood(&inputs, &boundary_config(s.attenuation)).unwrap();
    let grid = Square8::for_field(&s.grid.dem);

    for (cell, &z) in s.grid.dem.iter_cells() {
        let reach = s.seed_level - s.attenuation * grid.distance(s.seed, cell) as f32;
        if cell != s.seed && z >= reach {
            assert!(out.depth[cell].is_nan(), "{cell} at elevation {z} flooded");
        }
    }
}

#[test]
fn land_cut_off_by_sea_stays_dry() {
    let s = scenario_5x5();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &s.forcing);
    let out = run_flood(&inputs, &boundary_config(s.attenuation)).unwrap();
    // Column 0 is land at elevation 0, well below the forcing, but only
    // touches the seed through the sea column.
    for row in 0..5 {
        assert!(out.depth[Cell::new(row, 0)].is_nan());
        assert_eq!(out.level[Cell::new(row, 0)], f32::NEG_INFINITY);
    }
}

#[test]
fn flood_map_marks_finite_depth() {
    let s = scenario_5x5();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &s.forcing);
    let out = run_flood(&inputs, &boundary_config(s.attenuation)).unwrap();
    let map = flood_map(&out.depth);
    assert_eq!(map.count(|&v| v == FLOODED), out.summary.flooded_cells);
    assert_eq!(map[Cell::new(0, 0)], NOT_FLOODED);
    assert_eq!(out.summary.flooded_cells, 9);
    assert_eq!(out.summary.max_depth, 5.0);
}

// ── Edge-seeded coastline ───────────────────────────────────────

#[test]
fn edge_seeding_propagates_from_coastal_forcing() {
    let s = scenario_5x5();
    // Forcing known only along the coastal column 2.
    let mut forcing = Field2D::filled(5, 5, MISSING).unwrap();
    for row in 0..5 {
        forcing[Cell::new(row, 2)] = 5.0;
    }
    let config = FloodConfig::builder().attenuation(1.0).build().unwrap();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &forcing);
    let out = run_flood(&inputs, &config).unwrap();

    let expected = Field2D::from_rows(&[
        vec![N, N, 4.0, 2.0, N],
        vec![N, N, 4.0, 1.0, N],
        vec![N, N, 5.0, 2.0, N],
        vec![N, N, 4.0, 1.0, N],
        vec![N, N, 3.0, 1.0, N],
    ])
    .unwrap();
    assert_field_close(&out.depth, &expected, 1e-6);
    // Both coastal columns seed; column 0 has no forcing and relaxes nothing.
    assert_eq!(out.metrics.seeds, 10);
}

#[test]
fn strict_coastline_threshold_still_finds_straight_coast() {
    let s = scenario_5x5();
    let forcing = tidewater_test_utils::uniform_forcing((5, 5), 5.0);
    let config = FloodConfig::builder()
        .coastline_threshold(1.0)
        .build()
        .unwrap();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &forcing);
    let out = run_flood(&inputs, &config).unwrap();
    // Every land cell beside a straight sea column has at least two sea
    // neighbours, corners included.
    assert_eq!(out.metrics.seeds, 10);
}

// ── Degenerate inputs ───────────────────────────────────────────

#[test]
fn all_sea_mask_yields_all_missing() {
    let s = scenario_5x5();
    let mask = Field2D::filled(5, 5, 0.0f32).unwrap();
    let inputs = FloodInputs::new(&s.grid.dem, &mask, &s.forcing);
    let out = run_flood(&inputs, &boundary_config(1.0)).unwrap();
    assert_eq!(out.depth.missing_count(), 25);
}

#[test]
fn shape_mismatch_is_rejected() {
    let s = scenario_5x5();
    let forcing = Field2D::filled(4, 5, 5.0f32).unwrap();
    let inputs = FloodInputs::new(&s.grid.dem, &s.grid.mask, &forcing);
    assert!(run_flood(&inputs, &boundary_config(1.0)).is_err());
}
