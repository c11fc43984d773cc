//! Conversions between models. Conversions only operate on the 3 color
//! components.
//!
//! The arithmetic is done in double precision regardless of [`Component`],
//! so integer percentages and degrees derived from it are stable at
//! rounding boundaries.

use crate::{
    color::{Color, Component, Components},
    models::{Hsl, Srgb, SrgbLinear},
};

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(red, green, blue) = self.to_components();
        let (hue, saturation, lightness) = util::rgb_to_hsl(red.into(), green.into(), blue.into());
        Hsl::new(
            hue as Component,
            saturation as Component,
            lightness as Component,
        )
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        let Components(red, green, blue) = self
            .to_components()
            .map(|value| util::to_linear_light(value.into()) as Component);
        SrgbLinear::new(red, green, blue)
    }
}

impl Color {
    /// The channels normalized to `[0, 1]` in double precision.
    pub(crate) fn to_unit(&self) -> [f64; 3] {
        self.channels().map(|channel| f64::from(channel) / 255.0)
    }

    /// Hue in degrees in `[0, 360]`, saturation and lightness in `[0, 1]`.
    pub(crate) fn to_hsl_unrounded(&self) -> (f64, f64, f64) {
        let [red, green, blue] = self.to_unit();
        util::rgb_to_hsl(red, green, blue)
    }

    /// The channels converted to linear light in double precision.
    pub(crate) fn to_linear_unit(&self) -> [f64; 3] {
        self.to_unit().map(util::to_linear_light)
    }
}

mod util {
    use crate::models::LINEAR_THRESHOLD;

    /// Calculate the hue as a fraction of a full turn from RGB components
    /// and return it along with the min and max RGB values. Achromatic colors
    /// get a hue of 0.
    fn rgb_to_hue_with_min_max(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            let sextant = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            sextant / 6.0
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation. The hue is returned in
    /// degrees.
    pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
        let (hue, min, max) = rgb_to_hue_with_min_max(red, green, blue);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Degrees only after the division by 6.
        (hue * 360.0, saturation, lightness)
    }

    /// Remove the sRGB transfer function from a single gamma encoded value.
    pub fn to_linear_light(value: f64) -> f64 {
        if value <= LINEAR_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }
}
