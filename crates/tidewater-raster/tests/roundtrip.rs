//! Write-then-read through real files in the system temp directory.

use std::path::PathBuf;

use tidewater_core::{Cell, Field2D, MISSING};
use tidewater_raster::{
    read_raster, read_raster_with_limits, write_mask, write_raster, GeoMetadata, Limits, RasterError,
};
use tidewater_test_utils::assert_field_close;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tidewater-{}-{name}.tif", std::process::id()))
}

fn utm_meta() -> GeoMetadata {
    GeoMetadata {
        pixel_scale: Some(vec![30.0, 30.0, 0.0]),
        tiepoint: Some(vec![0.0, 0.0, 0.0, 500_000.0, 4_000_000.0, 0.0]),
        key_directory: Some(vec![1, 1, 0, 2, 1024, 0, 1, 1, 3072, 0, 1, 32650]),
        ascii_params: Some("WGS 84 / UTM zone 50N|".to_string()),
        ..Default::default()
    }
}

#[test]
fn depth_field_round_trips_with_missing_cells() {
    let path = temp_path("depth");
    let depth = Field2D::from_rows(&[
        vec![MISSING, 0.25, 1.5],
        vec![2.0, MISSING, 0.0],
    ])
    .unwrap();
    write_raster(&path, &utm_meta(), &depth).unwrap();

    let back = read_raster(&path).unwrap();
    assert_field_close(&back.field, &depth, 1e-6);
    assert!(back.nodata.is_some_and(f64::is_nan));
    std::fs::remove_file(&path).ok();
}

#[test]
fn geo_metadata_round_trips() {
    let path = temp_path("meta");
    let field = Field2D::filled(2, 2, 1.0f32).unwrap();
    let meta = utm_meta();
    write_raster(&path, &meta, &field).unwrap();

    let back = read_raster(&path).unwrap();
    assert_eq!(back.meta.pixel_scale, meta.pixel_scale);
    assert_eq!(back.meta.tiepoint, meta.tiepoint);
    assert_eq!(back.meta.key_directory, meta.key_directory);
    assert_eq!(back.meta.geotransform(), meta.geotransform());
    std::fs::remove_file(&path).ok();
}

#[test]
fn plain_tiff_reads_with_empty_metadata() {
    let path = temp_path("plain");
    let field = Field2D::filled(3, 1, 4.0f32).unwrap();
    write_raster(&path, &GeoMetadata::default(), &field).unwrap();

    let back = read_raster(&path).unwrap();
    assert!(back.meta.is_empty());
    assert_eq!(back.field.shape(), (3, 1));
    std::fs::remove_file(&path).ok();
}

#[test]
fn flood_map_nodata_becomes_missing_on_read() {
    let path = temp_path("map");
    let map = Field2D::from_rows(&[vec![1u8, 255], vec![255, 1]]).unwrap();
    write_mask(&path, &utm_meta(), &map, Some(255)).unwrap();

    let back = read_raster(&path).unwrap();
    assert_eq!(back.nodata, Some(255.0));
    assert_eq!(back.field[Cell::new(0, 0)], 1.0);
    assert!(back.field[Cell::new(0, 1)].is_nan());
    assert_eq!(back.field.missing_count(), 2);
    std::fs::remove_file(&path).ok();
}

#[test]
fn decoder_limits_are_honoured() {
    let path = temp_path("limits");
    // 64 x 64 Float32 decodes to 16 KiB.
    let field = Field2D::filled(64, 64, 1.0f32).unwrap();
    write_raster(&path, &GeoMetadata::default(), &field).unwrap();

    let mut tight = Limits::default();
    tight.decoding_buffer_size = 1024;
    let err = read_raster_with_limits(&path, tight).unwrap_err();
    assert!(matches!(err, RasterError::Tiff { .. }));

    let back = read_raster(&path).unwrap();
    assert_eq!(back.field.shape(), (64, 64));
    std::fs::remove_file(&path).ok();
}

#[test]
#[ignore = "writes and decodes a 270 MB raster"]
fn raster_above_default_decoder_limit_round_trips() {
    let path = temp_path("large");
    let field = Field2D::filled(8200, 8200, 1.0f32).unwrap();
    write_raster(&path, &GeoMetadata::default(), &field).unwrap();

    let back = read_raster(&path).unwrap();
    assert_eq!(back.field.shape(), (8200, 8200));
    assert_eq!(back.field[Cell::new(8199, 8199)], 1.0);
    std::fs::remove_file(&path).ok();
}
