/// Convenience result type used across svgager.
pub type SvgagerResult<T> = Result<T, SvgagerError>;

/// Top-level error taxonomy for the conversion pipeline.
///
/// Validation variants are produced before any parsing or rendering work starts. Parse, render
/// and encode failures carry the first diagnostic encountered; no partial output is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum SvgagerError {
    /// No target format was supplied.
    #[error("missing format: a target format is required (supported: {})", crate::OutputFormat::SUPPORTED.join(", "))]
    MissingFormat,

    /// The target format is not one of the supported set.
    #[error("unsupported format '{value}' (supported: {})", crate::OutputFormat::SUPPORTED.join(", "))]
    UnsupportedFormat {
        /// Format string as supplied by the caller.
        value: String,
    },

    /// A requested width or height is not a positive integer.
    #[error("invalid {dimension}: {value} (must be a positive integer)")]
    InvalidDimension {
        /// `"width"` or `"height"`.
        dimension: &'static str,
        /// Offending value as supplied by the caller.
        value: String,
    },

    /// Replacements were supplied but are not a string-to-string mapping.
    #[error("invalid replacements: {0}")]
    InvalidReplacements(String),

    /// The source text is not a well-formed SVG document.
    #[error("Failed to parse SVG: {0}")]
    Parse(String),

    /// The background color is not a `RRGGBB` hex triplet.
    #[error("invalid background color: {0}")]
    InvalidBackgroundColor(String),

    /// Degenerate geometry or a canvas that cannot be rasterized.
    #[error("render error: {0}")]
    Render(String),

    /// The pixel buffer could not be serialized into the requested container.
    #[error("encode error: {0}")]
    Encode(String),

    /// Encoded bytes do not match the expected container layout.
    #[error("container error: {0}")]
    Container(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Fieldless tag for each [`SvgagerError`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`SvgagerError::MissingFormat`].
    MissingFormat,
    /// See [`SvgagerError::UnsupportedFormat`].
    UnsupportedFormat,
    /// See [`SvgagerError::InvalidDimension`].
    InvalidDimension,
    /// See [`SvgagerError::InvalidReplacements`].
    InvalidReplacements,
    /// See [`SvgagerError::Parse`].
    Parse,
    /// See [`SvgagerError::InvalidBackgroundColor`].
    InvalidBackgroundColor,
    /// See [`SvgagerError::Render`].
    Render,
    /// See [`SvgagerError::Encode`].
    Encode,
    /// See [`SvgagerError::Container`].
    Container,
    /// See [`SvgagerError::Other`].
    Other,
}

impl SvgagerError {
    /// Build a [`SvgagerError::UnsupportedFormat`] value.
    pub fn unsupported_format(value: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            value: value.into(),
        }
    }

    /// Build a [`SvgagerError::InvalidDimension`] value.
    pub fn invalid_dimension(dimension: &'static str, value: impl ToString) -> Self {
        Self::InvalidDimension {
            dimension,
            value: value.to_string(),
        }
    }

    /// Build a [`SvgagerError::InvalidReplacements`] value.
    pub fn invalid_replacements(msg: impl Into<String>) -> Self {
        Self::InvalidReplacements(msg.into())
    }

    /// Build a [`SvgagerError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SvgagerError::InvalidBackgroundColor`] value.
    pub fn invalid_background_color(msg: impl Into<String>) -> Self {
        Self::InvalidBackgroundColor(msg.into())
    }

    /// Build a [`SvgagerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SvgagerError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SvgagerError::Container`] value.
    pub fn container(msg: impl Into<String>) -> Self {
        Self::Container(msg.into())
    }

    /// Return the fieldless tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFormat => ErrorKind::MissingFormat,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            Self::InvalidReplacements(_) => ErrorKind::InvalidReplacements,
            Self::Parse(_) => ErrorKind::Parse,
            Self::InvalidBackgroundColor(_) => ErrorKind::InvalidBackgroundColor,
            Self::Render(_) => ErrorKind::Render,
            Self::Encode(_) => ErrorKind::Encode,
            Self::Container(_) => ErrorKind::Container,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
