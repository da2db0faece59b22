pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Round half away from zero into a pixel count of at least 1.
///
/// Returns `None` for non-finite, non-positive or out-of-range values.
pub(crate) fn round_to_px(v: f64) -> Option<u32> {
    if !v.is_finite() || v <= 0.0 {
        return None;
    }
    let r = v.round().max(1.0);
    if r > f64::from(u32::MAX) {
        return None;
    }
    Some(r as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
