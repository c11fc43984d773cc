//! Configuration constants and the runtime [`Config`] built from them.
//!
//! These values control classification and the timing of the interaction
//! driver.

use std::time::Duration;

use crate::Color;

/// Luminance above which a color is classified as light.
/// A design choice, not derived from a standard.
pub const TONE_THRESHOLD: f64 = 0.6;

/// How long a successful copy stays acknowledged (in milliseconds).
pub const ACKNOWLEDGMENT_MILLIS: u64 = 1400;

/// The color shown before the first regeneration, `#6C5CE7`.
pub const INITIAL_COLOR: Color = Color::new(108, 92, 231);

/// Keys that trigger a regeneration, compared case-insensitively.
pub const REGENERATE_KEYS: [&str; 2] = [" ", "g"];

/// Alpha of the strong background wash derived from the current color.
pub const WASH_ALPHA_STRONG: u8 = 0x22;

/// Alpha of the faint background wash derived from the current color.
pub const WASH_ALPHA_FAINT: u8 = 0x18;

/// Runtime tunable values for the interaction driver.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// See [`TONE_THRESHOLD`].
    pub tone_threshold: f64,
    /// See [`ACKNOWLEDGMENT_MILLIS`].
    pub acknowledgment: Duration,
    /// See [`INITIAL_COLOR`].
    pub initial: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tone_threshold: TONE_THRESHOLD,
            acknowledgment: Duration::from_millis(ACKNOWLEDGMENT_MILLIS),
            initial: INITIAL_COLOR,
        }
    }
}
