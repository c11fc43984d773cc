//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

randhue_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue of the color in degrees, `[0, 360)`.
        pub hue: Component,
        /// The saturation of the color, `[0, 1]`.
        pub saturation: Component,
        /// The lightness of the color, `[0, 1]`.
        pub lightness: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Components;

    #[test]
    fn components_round_trip_through_model() {
        let hsl = Hsl::new(25.0, 0.75, 0.5);
        assert_eq!(hsl.to_components(), Components(25.0, 0.75, 0.5));
        assert_eq!(Hsl::from(Components(25.0, 0.75, 0.5)), hsl);
    }
}
