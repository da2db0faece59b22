use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{SvgagerError, SvgagerResult};

/// Target container format.
///
/// `Jpg` and `Jpeg` are distinct spellings of the same codec; both are kept so the accepted
/// spelling round-trips through [`OutputFormat::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG, RGBA with alpha preserved.
    Png,
    /// JPEG (baseline), RGB only.
    Jpg,
    /// Alias of [`OutputFormat::Jpg`].
    Jpeg,
    /// GIF89a, palette-quantized.
    Gif,
    /// WebP (lossless VP8L).
    Webp,
}

impl OutputFormat {
    /// Accepted format spellings in canonical order.
    pub const SUPPORTED: &'static [&'static str] = &["png", "jpg", "jpeg", "gif", "webp"];

    /// Parse a format name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> SvgagerResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            "webp" => Ok(Self::Webp),
            _ => Err(SvgagerError::unsupported_format(value)),
        }
    }

    /// Infer the format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::parse(ext).ok()
    }

    /// Lowercase canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            other => other.as_str(),
        }
    }

    /// IANA media type.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// Whether the container can carry any form of transparency.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, Self::Jpg | Self::Jpeg)
    }

    /// Whether artwork is rendered over a transparent canvas instead of the background color.
    ///
    /// Only PNG keeps transparency; every other target is flattened over the background.
    pub fn preserves_transparency(self) -> bool {
        matches!(self, Self::Png)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = SvgagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Final raster size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
