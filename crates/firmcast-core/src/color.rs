//! Embed accent colors
//!
//! The UI layer works with `#RRGGBB` hex strings; the Discord wire
//! format wants a 24-bit integer. `Color` holds the integer and
//! converts at the edges.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ComposeError;

/// A 24-bit RGB embed color.
///
/// Serializes as a `#RRGGBB` hex string so stored templates and
/// message documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Discord blurple, the default accent for new embeds.
    pub const DEFAULT: Color = Color(0x5865F2);

    /// Parse a hex color string, with or without a leading `#`.
    /// Case-insensitive; must be exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ComposeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ComposeError::InvalidColor(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color)
            .map_err(|_| ComposeError::InvalidColor(hex.to_string()))
    }

    /// Parse a hex color string, falling back to the default accent
    /// when the input is absent or malformed. Mirrors the lenient
    /// preview behavior: a bad color never blocks rendering.
    pub fn from_hex_or_default(hex: Option<&str>) -> Self {
        hex.and_then(|h| Self::from_hex(h).ok())
            .unwrap_or(Self::DEFAULT)
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0 & 0xFFFFFF)
    }

    /// The raw 24-bit integer Discord expects on the wire.
    pub fn to_wire(self) -> u32 {
        self.0 & 0xFFFFFF
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
