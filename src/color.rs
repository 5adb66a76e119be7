//! Chart series colors.
//!
//! Chart configurations store their color as a `#RRGGBB` string. [`Rgb`] is
//! the decoded form handed to renderers.

use crate::constants::DEFAULT_CHART_COLOR;

/// Opaque RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Opaque blue, used for colors that fail to decode.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Default chart series color (`#007AFF`).
    pub const DEFAULT: Self = Self::new(0x00, 0x7A, 0xFF);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as `#RRGGBB` with uppercase digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Strictly decode six hex digits, with or without surrounding punctuation
    /// such as a leading `#`.
    #[must_use]
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }

    /// Decode a stored color; anything that is not six hex digits is blue.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Self::BLUE)
    }

    /// The color new charts start with
    #[must_use]
    pub fn default_chart() -> Self {
        Self::from_hex(DEFAULT_CHART_COLOR)
    }
}
