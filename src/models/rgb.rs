//! Model a color in the sRGB color space.

use crate::color::Component;

/// Tags that specify whether RGB components are gamma encoded.
pub mod encoding {
    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components carry the sRGB transfer function, as stored in a
    /// [`Color`](crate::Color).
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

randhue_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Gamma encoded values at or below this use the linear segment of the sRGB
/// transfer function. This is the WCAG 2.x form of the constant.
pub const LINEAR_THRESHOLD: f64 = 0.03928;

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;
