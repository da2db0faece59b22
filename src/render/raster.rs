use crate::config::RenderConfig;
use crate::document::parse::Document;
use crate::foundation::color::Rgb8;
use crate::foundation::core::{Canvas, OutputFormat};
use crate::foundation::error::{SvgagerError, SvgagerResult};
use crate::render::buffer::PixelBuffer;
use crate::render::composite::{flatten_premul_over_bg_in_place, unpremultiply_rgba8_in_place};

/// What the artwork is composited onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    /// Fully transparent canvas; alpha is preserved.
    Transparent,
    /// Opaque fill beneath the artwork.
    Solid(Rgb8),
}

impl Background {
    /// Background for `format`.
    ///
    /// PNG is transparent and ignores `color`. Every other format is filled with `color`, or
    /// white when none is given; the color is parsed only in that case.
    pub fn for_format(format: OutputFormat, color: Option<&str>) -> SvgagerResult<Self> {
        if format.preserves_transparency() {
            return Ok(Self::Transparent);
        }
        match color {
            Some(hex) => Ok(Self::Solid(Rgb8::parse_hex(hex)?)),
            None => Ok(Self::Solid(Rgb8::WHITE)),
        }
    }
}

/// Render `doc` onto a `canvas`-sized buffer over `background`.
///
/// The document's coordinate space is stretched onto the canvas independently on each axis, so a
/// canvas with a different aspect ratio distorts the artwork.
#[tracing::instrument(skip(doc, config), fields(w = canvas.width, h = canvas.height))]
pub fn rasterize(
    doc: &Document,
    canvas: Canvas,
    background: Background,
    config: &RenderConfig,
) -> SvgagerResult<PixelBuffer> {
    let Canvas { width, height } = canvas;
    if width == 0 || height == 0 {
        return Err(SvgagerError::render(format!(
            "canvas {width}x{height} has no pixels"
        )));
    }

    // Avoid pathological allocations. Callers that need larger output raise the limit explicitly.
    let max = config.max_canvas_dim;
    if width > max || height > max {
        return Err(SvgagerError::render(format!(
            "canvas too large: {width}x{height} (max {max}x{max})"
        )));
    }

    let (vw, vh) = doc.viewport_size();
    if !(vw.is_finite() && vh.is_finite() && vw > 0.0 && vh > 0.0) {
        return Err(SvgagerError::render(format!(
            "document viewport {vw}x{vh} is degenerate"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        SvgagerError::render(format!("failed to allocate {width}x{height} pixmap"))
    })?;

    let sx = (width as f32) / vw;
    let sy = (height as f32) / vh;
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(doc.tree(), xform, &mut pixmap.as_mut());

    let mut data = pixmap.take();
    match background {
        Background::Transparent => unpremultiply_rgba8_in_place(&mut data),
        Background::Solid(color) => flatten_premul_over_bg_in_place(&mut data, color.to_rgba8())?,
    }
    tracing::debug!(?background, "rasterized document");

    PixelBuffer::from_rgba8(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
