//! Keyboard shortcuts.

use crate::config::REGENERATE_KEYS;

/// The kind of control holding keyboard focus when a key is pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Nothing in particular has focus.
    #[default]
    None,
    /// A text entry control, which owns its key presses.
    TextInput,
    /// Any other control, e.g. a button.
    Other,
}

/// Whether pressing `key` with `focus` should regenerate the color.
pub fn is_regenerate_shortcut(key: &str, focus: Focus) -> bool {
    if focus == Focus::TextInput {
        return false;
    }
    let key = key.to_lowercase();
    REGENERATE_KEYS.contains(&key.as_str())
}
