//! Relative luminance and the binary light/dark tone derived from it.

use std::fmt;

use crate::{color::Color, config, math::dot};

/// BT.709 weights for red, green and blue.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Whether a color reads as light or dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Luminance above the threshold.
    Light,
    /// Luminance at or below the threshold.
    Dark,
}

impl Tone {
    /// Classify `color` against a custom luminance threshold.
    pub fn classify(color: &Color, threshold: f64) -> Self {
        if luminance(color) > threshold {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Relative luminance of `color` in `[0, 1]`, computed in double precision.
pub fn luminance(color: &Color) -> f64 {
    dot(LUMINANCE_WEIGHTS, color.to_linear_unit()).clamp(0.0, 1.0)
}

/// Classify `color` against [`config::TONE_THRESHOLD`].
pub fn classify_tone(color: &Color) -> Tone {
    Tone::classify(color, config::TONE_THRESHOLD)
}

impl Color {
    /// Relative luminance of this color in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        luminance(self)
    }

    /// The tone of this color against the default threshold.
    pub fn tone(&self) -> Tone {
        classify_tone(self)
    }
}
