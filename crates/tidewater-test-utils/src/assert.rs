//! Field assertions that treat `NaN` as an ordinary value.

use tidewater_core::Field2D;

/// Assert both fields have the same shape and the same missing cells.
#[track_caller]
pub fn assert_same_missing(a: &Field2D<f32>, b: &Field2D<f32>) {
    assert_eq!(a.shape(), b.shape(), "field shapes differ");
    for ((cell, x), y) in a.iter_cells().zip(b.as_slice()) {
        assert_eq!(
            x.is_nan(),
            y.is_nan(),
            "missing pattern differs at {cell}: {x} vs {y}"
        );
    }
}

/// Assert equal shape, equal missing pattern, and every other value
/// within `tol` (infinities must match exactly).
#[track_caller]
pub fn assert_field_close(a: &Field2D<f32>, b: &Field2D<f32>, tol: f32) {
    assert_same_missing(a, b);
    for ((cell, &x), &y) in a.iter_cells().zip(b.as_slice()) {
        if x.is_nan() {
            continue;
        }
        if x.is_infinite() || y.is_infinite() {
            assert_eq!(x, y, "infinite value differs at {cell}");
        } else {
            assert!((x - y).abs() <= tol, "value differs at {cell}: {x} vs {y}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_core::MISSING;

    #[test]
    fn close_fields_pass() {
        let a = Field2D::from_rows(&[vec![1.0, MISSING, f32::NEG_INFINITY]]).unwrap();
        let b = Field2D::from_rows(&[vec![1.0 + 1e-7, MISSING, f32::NEG_INFINITY]]).unwrap();
        assert_field_close(&a, &b, 1e-6);
    }

    #[test]
    #[should_panic(expected = "missing pattern differs")]
    fn nan_mismatch_fails() {
        let a = Field2D::from_rows(&[vec![1.0, MISSING]]).unwrap();
        let b = Field2D::from_rows(&[vec![1.0, 2.0]]).unwrap();
        assert_same_missing(&a, &b);
    }
}
