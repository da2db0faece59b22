use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder as _};

use crate::foundation::core::OutputFormat;
use crate::foundation::error::{SvgagerError, SvgagerResult};
use crate::render::buffer::PixelBuffer;

/// Encoded image bytes tagged with their container format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    format: OutputFormat,
    bytes: Vec<u8>,
}

impl EncodedImage {
    /// Container format of the bytes.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Media type of the bytes.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Serialize `buffer` into `format`'s container.
///
/// `jpeg_quality` applies to `jpg`/`jpeg` only.
#[tracing::instrument(skip(buffer), fields(w = buffer.width(), h = buffer.height()))]
pub fn encode(
    buffer: &PixelBuffer,
    format: OutputFormat,
    jpeg_quality: u8,
) -> SvgagerResult<EncodedImage> {
    let bytes = match format {
        OutputFormat::Png => encode_png(buffer)?,
        OutputFormat::Jpg | OutputFormat::Jpeg => encode_jpeg(buffer, jpeg_quality)?,
        OutputFormat::Gif => encode_gif(buffer)?,
        OutputFormat::Webp => encode_webp(buffer)?,
    };
    tracing::debug!(bytes = bytes.len(), "encoded image");
    Ok(EncodedImage { format, bytes })
}

fn codec_error(format: OutputFormat) -> impl FnOnce(image::ImageError) -> SvgagerError {
    move |e| {
        let name = format.as_str().to_uppercase();
        SvgagerError::encode(format!("failed to encode {name}: {e}"))
    }
}

fn encode_png(buffer: &PixelBuffer) -> SvgagerResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            buffer.data(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(codec_error(OutputFormat::Png))?;
    Ok(out)
}

fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> SvgagerResult<Vec<u8>> {
    // Baseline JPEG carries no alpha; the rasterizer has already flattened the background.
    let rgb = buffer.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .write_image(&rgb, buffer.width(), buffer.height(), ExtendedColorType::Rgb8)
        .map_err(codec_error(OutputFormat::Jpeg))?;
    Ok(out)
}

fn encode_gif(buffer: &PixelBuffer) -> SvgagerResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        // The GIF trailer is written when the encoder is dropped.
        let mut enc = GifEncoder::new(&mut out);
        enc.encode(
            buffer.data(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(codec_error(OutputFormat::Gif))?;
    }
    if out.last() != Some(&0x3B) {
        return Err(SvgagerError::encode("GIF encoder did not write a trailer"));
    }
    Ok(out)
}

fn encode_webp(buffer: &PixelBuffer) -> SvgagerResult<Vec<u8>> {
    let mut out = Vec::new();
    WebPEncoder::new_lossless(&mut out)
        .write_image(
            buffer.data(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(codec_error(OutputFormat::Webp))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/codec.rs"]
mod tests;
