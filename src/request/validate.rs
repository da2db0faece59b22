use std::path::Path;

use anyhow::Context as _;
use serde_json::Value;

use crate::foundation::core::OutputFormat;
use crate::foundation::error::{SvgagerError, SvgagerResult};

/// Loosely typed conversion options as they arrive from a host or a JSON file.
///
/// Dimensions and replacements stay as raw JSON so that shape errors are reported by
/// [`ConvertOptions::validate`] with the conversion error taxonomy rather than by serde.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Target format name (`png`, `jpg`, `jpeg`, `gif`, `webp`).
    pub format: Option<String>,
    /// Requested output width in pixels.
    pub width: Option<Value>,
    /// Requested output height in pixels.
    pub height: Option<Value>,
    /// Background color as `RRGGBB` or `#RRGGBB`.
    pub background_color: Option<String>,
    /// Literal substring replacements: a JSON object or an array of `[search, replace]` pairs.
    pub replacements: Option<Value>,
}

impl ConvertOptions {
    /// Parse options from a JSON document.
    pub fn from_json_str(s: &str) -> SvgagerResult<Self> {
        let opts = serde_json::from_str(s).context("parse conversion options JSON")?;
        Ok(opts)
    }

    /// Read and parse options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> SvgagerResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read conversion options '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check every option and produce a typed [`ConversionRequest`] for `source`.
    ///
    /// Checks run in a fixed order: format, width, height, replacements. The first failure is
    /// returned; nothing is parsed or rendered here.
    pub fn validate(&self, source: impl Into<String>) -> SvgagerResult<ConversionRequest> {
        let format = match self.format.as_deref() {
            None => return Err(SvgagerError::MissingFormat),
            Some(s) if s.trim().is_empty() => return Err(SvgagerError::MissingFormat),
            Some(s) => OutputFormat::parse(s)?,
        };

        let width = dimension("width", self.width.as_ref())?;
        let height = dimension("height", self.height.as_ref())?;
        let replacements = replacement_pairs(self.replacements.as_ref())?;

        Ok(ConversionRequest {
            source: source.into(),
            format,
            width,
            height,
            background_color: self.background_color.clone(),
            replacements,
        })
    }
}

/// A validated conversion request.
///
/// Fields are public so callers can build requests directly; [`ConversionRequest::check`] re-runs
/// the dimension checks that the typed fields cannot express (a width of `0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Raw SVG markup.
    pub source: String,
    /// Target container format.
    pub format: OutputFormat,
    /// Requested output width in pixels.
    pub width: Option<u32>,
    /// Requested output height in pixels.
    pub height: Option<u32>,
    /// Background color as `RRGGBB` or `#RRGGBB`; parsed only when applied.
    pub background_color: Option<String>,
    /// Ordered literal replacements applied to `source` before parsing.
    pub replacements: Vec<(String, String)>,
}

impl ConversionRequest {
    /// Create a request with no sizing, background or replacements.
    pub fn new(source: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            source: source.into(),
            format,
            width: None,
            height: None,
            background_color: None,
            replacements: Vec::new(),
        }
    }

    /// Set the requested width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the requested height.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Append a literal replacement.
    pub fn with_replacement(
        mut self,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        self.replacements.push((search.into(), replace.into()));
        self
    }

    /// Reject zero dimensions.
    pub fn check(&self) -> SvgagerResult<()> {
        if self.width == Some(0) {
            return Err(SvgagerError::invalid_dimension("width", 0));
        }
        if self.height == Some(0) {
            return Err(SvgagerError::invalid_dimension("height", 0));
        }
        Ok(())
    }
}

fn dimension(name: &'static str, value: Option<&Value>) -> SvgagerResult<Option<u32>> {
    let n = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n,
        Some(other) => return Err(SvgagerError::invalid_dimension(name, other)),
    };

    if let Some(u) = n.as_u64() {
        return match u32::try_from(u) {
            Ok(v) if v > 0 => Ok(Some(v)),
            _ => Err(SvgagerError::invalid_dimension(name, n)),
        };
    }

    // Integral floats such as `100.0` are accepted; negatives and fractions are not.
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 1.0 && f <= f64::from(u32::MAX) => Ok(Some(f as u32)),
        _ => Err(SvgagerError::invalid_dimension(name, n)),
    }
}

fn replacement_pairs(value: Option<&Value>) -> SvgagerResult<Vec<(String, String)>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => Ok((k.clone(), s.clone())),
                other => Err(SvgagerError::invalid_replacements(format!(
                    "value for \"{k}\" must be a string, got {}",
                    json_type_name(other)
                ))),
            })
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item.as_array().map(Vec::as_slice) {
                Some([Value::String(k), Value::String(v)]) => Ok((k.clone(), v.clone())),
                _ => Err(SvgagerError::invalid_replacements(format!(
                    "entry {i} must be a [search, replace] pair of strings"
                ))),
            })
            .collect(),
        Some(other) => Err(SvgagerError::invalid_replacements(format!(
            "expected a mapping of strings to strings, got {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/request/validate.rs"]
mod tests;
