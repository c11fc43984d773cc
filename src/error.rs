//! Error types.

use thiserror::Error;

/// Errors produced while parsing text into colors or representations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A hex color did not have exactly six digits after the optional `#`.
    #[error("expected 6 hex digits, got {0}")]
    InvalidLength(usize),
    /// A hex color contained something other than hex digits.
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
    /// The name of a representation was not one of `hex`, `rgb` or `hsl`.
    #[error("unknown representation {0:?}, expected hex, rgb or hsl")]
    UnknownRepresentation(String),
}

/// Errors produced by clipboard backends. The interaction driver absorbs all
/// of them; they only surface to callers that use a backend directly.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The environment refused the write, e.g. an insecure context or a
    /// denied permission.
    #[error("clipboard access denied: {0}")]
    Denied(String),
    /// Neither the preferred nor the fallback mechanism is available.
    #[error("no clipboard mechanism available")]
    Unavailable,
    /// The backend failed while performing the write.
    #[error("clipboard backend failed: {0}")]
    Backend(String),
    /// An I/O error from the underlying device or process.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
