//! Models are structs that represent a color in a specified encoding or
//! notation with normalized floating point components. They are the
//! intermediate forms used to derive representations from a [`Color`].
//!
//! [`Color`]: crate::Color

mod hsl;
mod rgb;

pub use hsl::*;
pub use rgb::*;
