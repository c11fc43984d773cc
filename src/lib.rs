//! randhue generates random sRGB colors, derives their HEX, RGB and HSL text
//! representations along with a light/dark tone, and drives the
//! regenerate/copy interaction of a random color tool.
//!
//! ```rust
//! use randhue::{Color, Representation, Tone};
//! let c = Color::new(108, 92, 231);
//! assert_eq!(c.to_hex(), "#6C5CE7");
//! assert_eq!(c.format(Representation::Rgb), "108, 92, 231");
//! assert_eq!(c.tone(), Tone::Dark);
//! ```

#![deny(missing_docs)]

mod color;
pub mod config;
mod convert;
pub mod driver;
mod error;
mod format;
mod math;
pub mod models;
mod tone;

pub use color::{random_color, Color, Component, Components};
pub use config::Config;
pub use driver::{
    Acknowledgment, Capabilities, Clipboard, CopyMethod, Driver, Focus, Selection,
};
pub use error::{ClipboardError, ParseError};
pub use format::Representation;
pub use tone::{classify_tone, luminance, Tone};
