//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::{Float, ToPrimitive};

/// Dot product of two triples.
pub fn dot<T: Float>(a: [T; 3], b: [T; 3]) -> T {
    Vector3D::new(a[0], a[1], a[2]).dot(Vector3D::new(b[0], b[1], b[2]))
}

/// Round to the nearest integer with halves rounded up. Negative values and
/// NaN become 0, values past the range saturate.
pub fn round_to_u16(value: f64) -> u16 {
    (value + 0.5).floor().max(0.0).to_u16().unwrap_or(u16::MAX)
}
