//! RGB colors and channel shading.
//!
//! Colors arrive from the host as hex strings, sometimes with an alpha pair
//! appended (`#rrggbbaa`). Only the first six hex digits are read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Color '{0}' has fewer than 6 hex digits")]
    TooShort(String),
    #[error("Color '{0}' contains non-hex digits")]
    InvalidHex(String),
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(0xff, 0xff, 0xff);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional). Characters after the sixth
    /// hex digit are ignored.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.chars().count() < 6 {
            return Err(ColorError::TooShort(s.to_string()));
        }

        // Checked on chars so a multibyte character is reported, not sliced.
        // from_str_radix also accepts a leading '+', which is not a hex digit.
        if !digits.chars().take(6).all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let digits = &digits[..6];

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Offset every channel by `amount`, clamping each to 0..=255.
    ///
    /// Positive amounts lighten, negative amounts darken. No color-space
    /// correction is applied.
    pub fn shade(self, amount: i32) -> Self {
        let offset = |channel: u8| i32::from(channel).saturating_add(amount).clamp(0, 255) as u8;
        Self {
            r: offset(self.r),
            g: offset(self.g),
            b: offset(self.b),
        }
    }

    /// Pack into `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Parse a hex color and shade it in one step.
pub fn shade_hex(color: &str, amount: i32) -> Result<Color, ColorError> {
    Ok(Color::from_hex(color)?.shade(amount))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}
