// ABOUTME: Error types for color parsing and list blending.
// ABOUTME: Every failure is fatal for the call that raised it.

use std::fmt;

/// A color string that is not `#` followed by six hex digits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Color {0:?} does not start with '#'")]
    MissingHash(String),

    #[error("Color {input:?} has {digits} hex digits, expected 6")]
    InvalidLength { input: String, digits: usize },

    #[error("Color {0:?} contains a non-hexadecimal digit")]
    InvalidHex(String),
}

/// Which argument of a list blend an element came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlendError {
    #[error("Invalid color at index {index} of {side} list: {source}")]
    InvalidColor {
        side: Side,
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error("Color lists differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
