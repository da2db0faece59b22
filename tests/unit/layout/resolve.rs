use super::*;
use crate::foundation::error::ErrorKind;

fn explicit(width: f64, height: f64) -> IntrinsicSize {
    IntrinsicSize::Explicit { width, height }
}

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn width_only_preserves_aspect_ratio() {
    assert_eq!(
        resolve_canvas(explicit(200.0, 100.0), Some(400), None).unwrap(),
        canvas(400, 200)
    );
}

#[test]
fn height_only_preserves_aspect_ratio() {
    assert_eq!(
        resolve_canvas(explicit(200.0, 100.0), None, Some(150)).unwrap(),
        canvas(300, 150)
    );
}

#[test]
fn both_dimensions_override_aspect_ratio() {
    assert_eq!(
        resolve_canvas(explicit(100.0, 100.0), Some(200), Some(100)).unwrap(),
        canvas(200, 100)
    );
}

#[test]
fn neither_dimension_uses_intrinsic_size() {
    assert_eq!(
        resolve_canvas(
            IntrinsicSize::ViewBox {
                width: 64.0,
                height: 48.0
            },
            None,
            None
        )
        .unwrap(),
        canvas(64, 48)
    );
    assert_eq!(
        resolve_canvas(explicit(10.5, 3.2), None, None).unwrap(),
        canvas(11, 3)
    );
}

#[test]
fn rounds_half_away_from_zero() {
    // 3 * 5 / 2 = 7.5 -> 8
    assert_eq!(
        resolve_canvas(explicit(2.0, 5.0), Some(3), None).unwrap(),
        canvas(3, 8)
    );
    // 7 * 3 / 2 = 10.5 -> 11
    assert_eq!(
        resolve_canvas(explicit(3.0, 2.0), None, Some(7)).unwrap(),
        canvas(11, 7)
    );
}

#[test]
fn result_is_at_least_one_pixel() {
    assert_eq!(
        resolve_canvas(explicit(1000.0, 1.0), Some(10), None).unwrap(),
        canvas(10, 1)
    );
}

#[test]
fn absent_intrinsic_size_falls_back_to_default() {
    assert_eq!(
        resolve_canvas(IntrinsicSize::Absent, None, None).unwrap(),
        canvas(DEFAULT_INTRINSIC_SIZE.0, DEFAULT_INTRINSIC_SIZE.1)
    );
    assert_eq!(
        resolve_canvas(IntrinsicSize::Absent, Some(50), None).unwrap(),
        canvas(50, 50)
    );
}

#[test]
fn degenerate_intrinsic_size_is_a_render_error() {
    for (w, h) in [(0.0, 10.0), (10.0, 0.0), (f64::NAN, 1.0)] {
        let err = resolve_dimensions(w, h, Some(10), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Render);
    }
}

#[test]
fn zero_requested_dimension_is_invalid() {
    let err = resolve_dimensions(10.0, 10.0, Some(0), Some(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDimension);
}
