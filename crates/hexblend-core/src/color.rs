// ABOUTME: Color representation and "#rrggbb" string conversion.
// ABOUTME: Rgb is a plain byte triple with no alpha channel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// How `Rgb` is rendered back to a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Always six lowercase digits: `#00ff00`
    #[default]
    Padded,
    /// Leading zeros dropped, as older themes produced: `#ff00`
    Unpadded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Unpack the low 24 bits of `value` as 0xRRGGBB
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value & 0xff_0000) >> 16) as u8,
            g: ((value & 0x00_ff00) >> 8) as u8,
            b: (value & 0x00_00ff) as u8,
        }
    }

    pub const fn packed(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse `#rrggbb`. Hex digits may be either case.
    pub fn from_hex(color: &str) -> Result<Self, ParseError> {
        let digits = color
            .strip_prefix('#')
            .ok_or_else(|| ParseError::MissingHash(color.to_string()))?;

        let count = digits.chars().count();
        if count != 6 {
            return Err(ParseError::InvalidLength {
                input: color.to_string(),
                digits: count,
            });
        }

        // from_str_radix alone would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex(color.to_string()));
        }

        // Unreachable after the checks above: six hex digits always fit in u32
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseError::InvalidHex(color.to_string()))?;
        Ok(Self::from_packed(value))
    }

    /// Render as `#rrggbb`
    pub fn to_hex(&self) -> String {
        self.to_hex_with(Encoding::Padded)
    }

    pub fn to_hex_with(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Padded => format!("#{:06x}", self.packed()),
            Encoding::Unpadded => format!("#{:x}", self.packed()),
        }
    }

    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Decode a `#rrggbb` string into its byte triple
pub fn decode(color: &str) -> Result<Rgb, ParseError> {
    Rgb::from_hex(color)
}

/// Encode a byte triple as a padded `#rrggbb` string
pub fn encode(color: Rgb) -> String {
    color.to_hex()
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.packed())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(color: Rgb) -> Self {
        (color.r, color.g, color.b)
    }
}
