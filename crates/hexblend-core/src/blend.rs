// ABOUTME: Per-channel alpha blending of two byte triples.
// ABOUTME: Rounding and overflow policy decide how blended values become bytes.

use serde::{Deserialize, Serialize};

use crate::color::{Encoding, Rgb};
use crate::list::Pairing;

/// Conversion of a blended channel value to an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Toward zero, like an integer cast
    #[default]
    Truncate,
    /// Nearest integer, halves away from zero
    Nearest,
}

/// What happens to channel values outside 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Clamp into 0..=255
    #[default]
    Saturate,
    /// Keep the low byte (modulo 256)
    Wrap,
}

/// Knobs for blending, as read from the `[policy]` config table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BlendPolicy {
    pub rounding: Rounding,
    pub overflow: Overflow,
    /// How lists of unequal length are paired
    pub pairing: Pairing,
    /// How blended colors are written back out
    pub encoding: Encoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blender {
    pub policy: BlendPolicy,
}

impl Blender {
    pub const fn new(policy: BlendPolicy) -> Self {
        Self { policy }
    }

    /// Blend `color2` over `color1`. `alpha` is the weight of `color2`:
    /// 0.0 gives `color1`, 1.0 gives `color2`. Alpha is not clamped.
    pub fn blend(&self, color1: Rgb, color2: Rgb, alpha: f64) -> Rgb {
        Rgb::new(
            self.channel(color1.r, color2.r, alpha),
            self.channel(color1.g, color2.g, alpha),
            self.channel(color1.b, color2.b, alpha),
        )
    }

    fn channel(&self, from: u8, to: u8, alpha: f64) -> u8 {
        // Same as alpha * to + (1 - alpha) * from, but exact at the endpoints
        let from = f64::from(from);
        let value = from + alpha * (f64::from(to) - from);
        self.quantize(value)
    }

    fn quantize(&self, value: f64) -> u8 {
        let value = match self.policy.rounding {
            Rounding::Truncate => value.trunc(),
            Rounding::Nearest => value.round(),
        };

        if !(0.0..=255.0).contains(&value) {
            tracing::trace!(value, overflow = ?self.policy.overflow, "blended channel out of range");
        }

        match self.policy.overflow {
            // `as` saturates and maps NaN to 0
            Overflow::Saturate => value as u8,
            Overflow::Wrap => {
                if value.is_finite() {
                    (value as i64).rem_euclid(256) as u8
                } else {
                    0
                }
            }
        }
    }
}

/// Blend with the default policy (truncate, saturate)
pub fn blend(color1: Rgb, color2: Rgb, alpha: f64) -> Rgb {
    Blender::default().blend(color1, color2, alpha)
}
