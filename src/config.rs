use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::SvgagerResult;

/// Largest canvas edge the rasterizer will allocate.
pub const DEFAULT_MAX_CANVAS_DIM: u32 = 16_384;

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Immutable renderer settings shared by every stage of a conversion.
///
/// The defaults reproduce the stock behavior: system fonts, JPEG quality 90 and a
/// 16384 px edge limit.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// JPEG quality in `1..=100`.
    pub jpeg_quality: u8,
    /// Load the host's installed fonts for `<text>` rendering.
    pub system_fonts: bool,
    /// Additional directories scanned (non-recursively) for `.ttf`, `.otf` and `.ttc` files.
    pub font_dirs: Vec<PathBuf>,
    /// Base directory for relative `<image href>` references.
    pub resources_dir: Option<PathBuf>,
    /// Largest allowed canvas width or height in pixels.
    pub max_canvas_dim: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            system_fonts: true,
            font_dirs: Vec::new(),
            resources_dir: None,
            max_canvas_dim: DEFAULT_MAX_CANVAS_DIM,
        }
    }
}

impl RenderConfig {
    /// Read a config from a JSON file. Missing keys take their default value.
    pub fn from_path(path: impl AsRef<Path>) -> SvgagerResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read render config '{}'", path.display()))?;
        let cfg = serde_json::from_str(&s)
            .with_context(|| format!("parse render config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Quality clamped into the range accepted by the JPEG encoder.
    pub(crate) fn effective_jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}
