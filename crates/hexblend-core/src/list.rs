// ABOUTME: Pairwise blending of two color lists in string form.
// ABOUTME: Either side may be a single color or a sequence of colors.

use serde::{Deserialize, Serialize};

use crate::blend::Blender;
use crate::color::Rgb;
use crate::error::{BlendError, Side};

/// How two lists of different lengths are paired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// Stop at the end of the shorter list, dropping the longer list's tail
    #[default]
    Truncate,
    /// Reject lists of different lengths
    Strict,
}

/// One side of a list blend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    Single(String),
    Sequence(Vec<String>),
}

impl ColorInput {
    /// Normalize to a sequence; a single color becomes a one-element list
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ColorInput::Single(color) => vec![color],
            ColorInput::Sequence(colors) => colors,
        }
    }
}

impl From<&str> for ColorInput {
    fn from(color: &str) -> Self {
        ColorInput::Single(color.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(color: String) -> Self {
        ColorInput::Single(color)
    }
}

impl From<Vec<String>> for ColorInput {
    fn from(colors: Vec<String>) -> Self {
        ColorInput::Sequence(colors)
    }
}

impl From<Vec<&str>> for ColorInput {
    fn from(colors: Vec<&str>) -> Self {
        ColorInput::Sequence(colors.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ColorInput {
    fn from(colors: &[&str]) -> Self {
        ColorInput::Sequence(colors.iter().map(|c| c.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ColorInput {
    fn from(colors: [&str; N]) -> Self {
        ColorInput::Sequence(colors.iter().map(|c| c.to_string()).collect())
    }
}

fn decode_at(color: &str, side: Side, index: usize) -> Result<Rgb, BlendError> {
    Rgb::from_hex(color).map_err(|source| {
        tracing::debug!(%side, index, error = %source, "rejecting color");
        BlendError::InvalidColor {
            side,
            index,
            source,
        }
    })
}

impl Blender {
    /// Blend two color lists element by element and re-encode the results.
    ///
    /// Any color that fails to parse aborts the whole call.
    pub fn blend_lists(
        &self,
        colors1: impl Into<ColorInput>,
        colors2: impl Into<ColorInput>,
        alpha: f64,
    ) -> Result<Vec<String>, BlendError> {
        let colors1 = colors1.into().into_vec();
        let colors2 = colors2.into().into_vec();

        if colors1.len() != colors2.len() {
            match self.policy.pairing {
                Pairing::Strict => {
                    return Err(BlendError::LengthMismatch {
                        left: colors1.len(),
                        right: colors2.len(),
                    });
                }
                Pairing::Truncate => {
                    tracing::debug!(
                        left = colors1.len(),
                        right = colors2.len(),
                        "color lists differ in length, dropping unmatched tail"
                    );
                }
            }
        }

        colors1
            .iter()
            .zip(&colors2)
            .enumerate()
            .map(|(index, (c1, c2))| -> Result<String, BlendError> {
                let c1 = decode_at(c1, Side::First, index)?;
                let c2 = decode_at(c2, Side::Second, index)?;
                let blended = self.blend(c1, c2, alpha);
                Ok(blended.to_hex_with(self.policy.encoding))
            })
            .collect()
    }
}

/// Blend two color lists with the default policy
pub fn blend_lists(
    colors1: impl Into<ColorInput>,
    colors2: impl Into<ColorInput>,
    alpha: f64,
) -> Result<Vec<String>, BlendError> {
    Blender::default().blend_lists(colors1, colors2, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::{blend, BlendPolicy, Rounding};
    use crate::color::{decode, encode, Encoding};
    use crate::error::ParseError;

    fn blender_with(policy: BlendPolicy) -> Blender {
        Blender::new(policy)
    }

    #[test]
    fn demo_lists_blend_halfway() {
        let out = blend_lists(["#ffffff", "#ff00ff"], ["#000000", "#a0ff00"], 0.5).unwrap();
        assert_eq!(out, vec!["#7f7f7f", "#cf7f7f"]);
    }

    #[test]
    fn demo_lists_with_nearest_rounding() {
        let b = blender_with(BlendPolicy {
            rounding: Rounding::Nearest,
            ..BlendPolicy::default()
        });
        let out = b
            .blend_lists(["#ffffff", "#ff00ff"], ["#000000", "#a0ff00"], 0.5)
            .unwrap();
        assert_eq!(out, vec!["#808080", "#d08080"]);
    }

    #[test]
    fn single_element_matches_codec_blend() {
        let expected = encode(blend(
            decode("#22a75f").unwrap(),
            decode("#ff8100").unwrap(),
            0.3,
        ));
        let out = blend_lists(vec!["#22a75f"], vec!["#ff8100"], 0.3).unwrap();
        assert_eq!(out, vec![expected]);
    }

    #[test]
    fn bare_string_equals_singleton_list() {
        let bare = blend_lists("#ff00ff", "#a0ff00", 0.5).unwrap();
        let wrapped = blend_lists(["#ff00ff"], ["#a0ff00"], 0.5).unwrap();
        assert_eq!(bare, wrapped);

        let mixed = blend_lists("#000000", ["#ffffff"], 1.0).unwrap();
        assert_eq!(mixed, vec!["#ffffff"]);
    }

    #[test]
    fn bare_string_pairs_with_first_element_only() {
        let out = blend_lists("#000000", ["#ffffff", "#ff0000", "#00ff00"], 1.0).unwrap();
        assert_eq!(out, vec!["#ffffff"]);
    }

    #[test]
    fn unequal_lengths_truncate_to_shorter() {
        let long = ["#ffffff", "#ff00ff", "#123456"];
        let short = ["#000000", "#a0ff00"];
        assert_eq!(blend_lists(long, short, 0.5).unwrap().len(), 2);
        assert_eq!(blend_lists(short, long, 0.5).unwrap().len(), 2);

        let empty: Vec<&str> = Vec::new();
        assert!(blend_lists(empty, long, 0.5).unwrap().is_empty());
    }

    #[test]
    fn strict_pairing_rejects_unequal_lengths() {
        let b = blender_with(BlendPolicy {
            pairing: Pairing::Strict,
            ..BlendPolicy::default()
        });
        let err = b
            .blend_lists(["#ffffff", "#ff00ff"], "#000000", 0.5)
            .unwrap_err();
        assert_eq!(err, BlendError::LengthMismatch { left: 2, right: 1 });

        assert!(b.blend_lists(["#ffffff"], ["#000000"], 0.5).is_ok());
    }

    #[test]
    fn malformed_entry_fails_whole_call() {
        let err = blend_lists(["#ffffff", "nope"], ["#000000", "#a0ff00"], 0.5).unwrap_err();
        match err {
            BlendError::InvalidColor {
                side,
                index,
                source,
            } => {
                assert_eq!(side, Side::First);
                assert_eq!(index, 1);
                assert_eq!(source, ParseError::MissingHash("nope".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = blend_lists("#ffffff", "#00zz00", 0.5).unwrap_err();
        assert!(matches!(
            err,
            BlendError::InvalidColor {
                side: Side::Second,
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn unmatched_tail_is_not_decoded() {
        let out = blend_lists(["#ffffff", "garbage"], ["#000000"], 0.5).unwrap();
        assert_eq!(out, vec!["#7f7f7f"]);
    }

    #[test]
    fn unpadded_encoding_reproduces_legacy_output() {
        let b = blender_with(BlendPolicy {
            encoding: Encoding::Unpadded,
            ..BlendPolicy::default()
        });
        let out = b.blend_lists("#000000", "#00ff00", 1.0).unwrap();
        assert_eq!(out, vec!["#ff00"]);
    }

    #[test]
    fn uppercase_input_gives_lowercase_output() {
        let out = blend_lists("#A0FF00", "#A0FF00", 0.5).unwrap();
        assert_eq!(out, vec!["#a0ff00"]);
    }

    #[test]
    fn into_vec_normalizes() {
        assert_eq!(
            ColorInput::from("#ffffff").into_vec(),
            vec!["#ffffff".to_string()]
        );
        let colors: &[&str] = &["#000000", "#ffffff"];
        assert_eq!(ColorInput::from(colors).into_vec().len(), 2);
    }
}
