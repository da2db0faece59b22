use crate::document::parse::IntrinsicSize;
use crate::foundation::core::Canvas;
use crate::foundation::error::{SvgagerError, SvgagerResult};
use crate::foundation::math::round_to_px;

/// Size assumed for documents that declare neither `width`/`height` nor a `viewBox`.
///
/// It is the canvas when the caller requests no dimensions, and the aspect basis when the caller
/// requests only one.
pub const DEFAULT_INTRINSIC_SIZE: (u32, u32) = (100, 100);

/// Compute the output canvas from a document's intrinsic size and the requested dimensions.
///
/// - both requested: used as-is, even if the aspect ratio changes
/// - one requested: the other follows the intrinsic aspect ratio, rounded half away from zero
/// - none requested: the intrinsic size, rounded
#[tracing::instrument(level = "debug", ret)]
pub fn resolve_canvas(
    intrinsic: IntrinsicSize,
    width: Option<u32>,
    height: Option<u32>,
) -> SvgagerResult<Canvas> {
    let (iw, ih) = intrinsic.dimensions().unwrap_or((
        f64::from(DEFAULT_INTRINSIC_SIZE.0),
        f64::from(DEFAULT_INTRINSIC_SIZE.1),
    ));
    resolve_dimensions(iw, ih, width, height)
}

/// [`resolve_canvas`] over raw intrinsic numbers.
pub fn resolve_dimensions(
    intrinsic_w: f64,
    intrinsic_h: f64,
    width: Option<u32>,
    height: Option<u32>,
) -> SvgagerResult<Canvas> {
    if width == Some(0) {
        return Err(SvgagerError::invalid_dimension("width", 0));
    }
    if height == Some(0) {
        return Err(SvgagerError::invalid_dimension("height", 0));
    }

    if let (Some(width), Some(height)) = (width, height) {
        return Ok(Canvas { width, height });
    }

    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !(usable(intrinsic_w) && usable(intrinsic_h)) {
        return Err(SvgagerError::render(format!(
            "intrinsic size {intrinsic_w}x{intrinsic_h} is degenerate; aspect ratio is undefined"
        )));
    }

    let scaled = |v: f64, what: &str| {
        round_to_px(v).ok_or_else(|| {
            SvgagerError::render(format!("resolved {what} {v} is not a representable pixel size"))
        })
    };

    match (width, height) {
        (Some(w), None) => Ok(Canvas {
            width: w,
            height: scaled(f64::from(w) * intrinsic_h / intrinsic_w, "height")?,
        }),
        (None, Some(h)) => Ok(Canvas {
            width: scaled(f64::from(h) * intrinsic_w / intrinsic_h, "width")?,
            height: h,
        }),
        _ => Ok(Canvas {
            width: scaled(intrinsic_w, "width")?,
            height: scaled(intrinsic_h, "height")?,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolve.rs"]
mod tests;
