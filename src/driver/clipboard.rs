//! Best-effort clipboard writes.
//!
//! Backends report what they can do as [`Capabilities`]; the driver resolves
//! those into a single [`CopyMethod`] and never inspects the environment
//! itself.

use bitflags::bitflags;

use crate::error::ClipboardError;

bitflags! {
    /// What a clipboard backend can do in the current environment.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Capabilities : u8 {
        /// The platform clipboard write API is present.
        const CLIPBOARD_API = 1 << 0;
        /// The environment is trusted enough to use the clipboard API.
        const SECURE_CONTEXT = 1 << 1;
        /// A selection based copy can be performed.
        const SELECTION_COPY = 1 << 2;
    }
}

/// The mechanism chosen for a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    /// Write through the platform clipboard API.
    Primary,
    /// Copy through a transient selection.
    Fallback,
    /// No mechanism is available.
    Unavailable,
}

impl Capabilities {
    /// Resolve the capability set into the mechanism to use.
    pub fn copy_method(self) -> CopyMethod {
        if self.contains(Self::CLIPBOARD_API | Self::SECURE_CONTEXT) {
            CopyMethod::Primary
        } else if self.contains(Self::SELECTION_COPY) {
            CopyMethod::Fallback
        } else {
            CopyMethod::Unavailable
        }
    }
}

/// A transient, off-screen selection holding text to copy. Implementors
/// release whatever backs the selection when it is dropped, so it is released
/// on every path, including failures.
pub trait Selection {
    /// Select `text` and copy it.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A platform clipboard.
pub trait Clipboard {
    /// Query what this clipboard can do right now.
    fn capabilities(&self) -> Capabilities;

    /// Write `text` through the platform clipboard API.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Create a transient selection for the fallback path.
    fn open_selection(&mut self) -> Result<Box<dyn Selection + '_>, ClipboardError>;
}

/// Copy `text` with the best mechanism `clipboard` offers. A failure of the
/// primary path does not fall back; the fallback is only for environments
/// without the primary path.
pub fn copy_text<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    text: &str,
) -> Result<CopyMethod, ClipboardError> {
    let method = clipboard.capabilities().copy_method();
    tracing::debug!(?method, "copying to clipboard");

    match method {
        CopyMethod::Primary => clipboard.write_text(text)?,
        CopyMethod::Fallback => {
            let mut selection = clipboard.open_selection()?;
            selection.copy(text)?;
        }
        CopyMethod::Unavailable => return Err(ClipboardError::Unavailable),
    }

    Ok(method)
}
