// ABOUTME: Hex color codec and alpha blending for window-manager themes.
// ABOUTME: Converts "#rrggbb" strings to byte triples, blends them, and back.

pub mod blend;
pub mod color;
pub mod config;
pub mod error;
pub mod list;

pub use blend::{blend, BlendPolicy, Blender, Overflow, Rounding};
pub use color::{decode, encode, Encoding, Rgb};
pub use config::{Config, ConfigError};
pub use error::{BlendError, ParseError, Side};
pub use list::{blend_lists, ColorInput, Pairing};
