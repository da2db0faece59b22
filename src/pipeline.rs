use crate::{
    config::RenderConfig,
    document::parse::parse_document,
    encode::codec::{EncodedImage, encode},
    foundation::core::OutputFormat,
    foundation::error::{SvgagerError, SvgagerResult},
    layout::resolve::resolve_canvas,
    render::raster::{Background, rasterize},
    request::preprocess::preprocess,
    request::validate::ConversionRequest,
};

/// Convert a validated request with the default [`RenderConfig`].
pub fn convert(request: &ConversionRequest) -> SvgagerResult<EncodedImage> {
    convert_with(request, &RenderConfig::default())
}

/// Convert a request: preprocess, parse, resolve size, rasterize, encode.
///
/// Every stage runs to completion or returns the first error; no partial image is produced.
#[tracing::instrument(skip_all, fields(format = %request.format))]
pub fn convert_with(
    request: &ConversionRequest,
    config: &RenderConfig,
) -> SvgagerResult<EncodedImage> {
    request.check()?;

    let text = preprocess(&request.source, &request.replacements);
    let doc = parse_document(&text, config)?;
    let canvas = resolve_canvas(doc.intrinsic(), request.width, request.height)?;
    let background = Background::for_format(request.format, request.background_color.as_deref())?;
    tracing::debug!(?canvas, ?background, "resolved output");

    let pixels = rasterize(&doc, canvas, background, config)?;
    encode(&pixels, request.format, config.effective_jpeg_quality())
}

/// String-typed conversion call for host bindings.
///
/// Errors are rendered through `Display`, so parse failures read `Failed to parse SVG: ...`.
pub fn convert_svg_to_image(
    svg_data: String,
    format: &str,
    width: Option<u32>,
    height: Option<u32>,
    background_color: Option<String>,
    replacements: Vec<(String, String)>,
) -> Result<Vec<u8>, String> {
    if format.trim().is_empty() {
        return Err(SvgagerError::MissingFormat.to_string());
    }
    let format = OutputFormat::parse(format).map_err(|e| e.to_string())?;

    let request = ConversionRequest {
        source: svg_data,
        format,
        width,
        height,
        background_color,
        replacements,
    };
    convert(&request)
        .map(EncodedImage::into_bytes)
        .map_err(|e| e.to_string())
}
