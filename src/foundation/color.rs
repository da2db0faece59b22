use crate::foundation::error::{SvgagerError, SvgagerResult};

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Default background for targets without transparency.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `RRGGBB` triplet, with or without a leading `#`.
    pub fn parse_hex(s: &str) -> SvgagerResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 {
            return Err(SvgagerError::invalid_background_color(format!(
                "\"{s}\" must be 6 hex digits (RRGGBB), got {} characters",
                hex.len()
            )));
        }

        fn hex_byte(pair: &str, channel: &str) -> SvgagerResult<u8> {
            // from_str_radix tolerates a leading '+', which is not a hex digit.
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(SvgagerError::invalid_background_color(format!(
                    "could not parse {channel} component \"{pair}\""
                )));
            }
            u8::from_str_radix(pair, 16).map_err(|_| {
                SvgagerError::invalid_background_color(format!(
                    "could not parse {channel} component \"{pair}\""
                ))
            })
        }

        if !hex.is_ascii() {
            return Err(SvgagerError::invalid_background_color(format!(
                "\"{s}\" contains non-hex characters"
            )));
        }

        Ok(Self {
            r: hex_byte(&hex[0..2], "red")?,
            g: hex_byte(&hex[2..4], "green")?,
            b: hex_byte(&hex[4..6], "blue")?,
        })
    }

    /// Opaque RGBA8 pixel for this color.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}
