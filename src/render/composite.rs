use crate::foundation::error::{SvgagerError, SvgagerResult};
use crate::foundation::math::mul_div255_u16;

/// Source-over a premultiplied RGBA8 buffer onto an opaque background, in place.
///
/// The result is opaque, so premultiplied and straight alpha coincide.
pub(crate) fn flatten_premul_over_bg_in_place(
    rgba_premul: &mut [u8],
    bg_rgba: [u8; 4],
) -> SvgagerResult<()> {
    if !rgba_premul.len().is_multiple_of(4) {
        return Err(SvgagerError::render(
            "flatten_premul_over_bg_in_place expects an rgba8 buffer",
        ));
    }

    let bg_r = bg_rgba[0] as u16;
    let bg_g = bg_rgba[1] as u16;
    let bg_b = bg_rgba[2] as u16;

    for px in rgba_premul.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }

        let inv = 255u16 - a;
        let r = px[0] as u16 + mul_div255_u16(bg_r, inv);
        let g = px[1] as u16 + mul_div255_u16(bg_g, inv);
        let b = px[2] as u16 + mul_div255_u16(bg_b, inv);

        px[0] = r.min(255) as u8;
        px[1] = g.min(255) as u8;
        px[2] = b.min(255) as u8;
        px[3] = 255;
    }

    Ok(())
}

/// Convert premultiplied RGBA8 to straight alpha, in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        match a {
            0 => {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
            }
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
