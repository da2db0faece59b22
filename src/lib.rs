//! svgager converts SVG documents into PNG, JPEG, GIF or WebP images.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: [`ConvertOptions`] -> [`ConversionRequest`] (format, dimensions, replacements)
//! 2. **Preprocess**: ordered literal substring replacements over the raw markup
//! 3. **Parse**: markup -> [`Document`] (render tree + [`IntrinsicSize`])
//! 4. **Resolve**: intrinsic size + requested width/height -> [`Canvas`]
//! 5. **Rasterize**: [`Document`] -> [`PixelBuffer`] over a transparent or solid [`Background`]
//! 6. **Encode**: [`PixelBuffer`] -> [`EncodedImage`] in the requested container
//!
//! Every stage is a pure function of its inputs. No state is shared between conversions except
//! the read-only system font database, which is loaded once per process.
//!
//! ```no_run
//! use svgager::{ConversionRequest, OutputFormat, convert};
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"/>"#;
//! let req = ConversionRequest::new(svg, OutputFormat::Webp).with_width(400);
//! let image = convert(&req)?;
//! assert_eq!(image.mime_type(), "image/webp");
//! # Ok::<(), svgager::SvgagerError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod document;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod request;

/// Container encoders and header probing.
pub mod encode;

pub use crate::config::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_CANVAS_DIM, RenderConfig};
pub use crate::document::parse::{Document, IntrinsicSize, SceneStats, parse_document};
pub use crate::encode::codec::{EncodedImage, encode};
pub use crate::encode::probe::{ContainerInfo, ContainerKind, WebpChunk, probe_container};
pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::{Canvas, OutputFormat};
pub use crate::foundation::error::{ErrorKind, SvgagerError, SvgagerResult};
pub use crate::layout::resolve::{DEFAULT_INTRINSIC_SIZE, resolve_canvas, resolve_dimensions};
pub use crate::pipeline::{convert, convert_svg_to_image, convert_with};
pub use crate::render::buffer::PixelBuffer;
pub use crate::render::raster::{Background, rasterize};
pub use crate::request::preprocess::preprocess;
pub use crate::request::validate::{ConversionRequest, ConvertOptions};
