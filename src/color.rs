//! A [`Color`] is an sRGB color with three 8-bit channels. Every
//! representation and classification in this crate is derived from it.

use rand::Rng;

use crate::models::Srgb;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all normalized components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all normalized components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// An immutable color value. Channels are integers in `[0, 255]`, which the
/// `u8` storage guarantees by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Color {
    /// Create a color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Sample a color from `rng`, drawing each channel independently and
    /// uniformly from `[0, 255]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// The channels in red, green, blue order.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// The channels normalized to `[0, 1]`.
    pub fn to_components(&self) -> Components {
        Components(
            Component::from(self.red) / 255.0,
            Component::from(self.green) / 255.0,
            Component::from(self.blue) / 255.0,
        )
    }

    /// View this color as a gamma encoded sRGB model.
    pub fn to_srgb(&self) -> Srgb {
        self.to_components().into()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// Sample a new random color from the thread local random source.
pub fn random_color() -> Color {
    Color::random(&mut rand::thread_rng())
}
