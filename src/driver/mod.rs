//! The interaction driver: holds the current color, reacts to regenerate
//! triggers and copies representations to a clipboard.
//!
//! The driver is single threaded and event driven. Time is passed in by the
//! caller so acknowledgment expiry is deterministic.

use std::time::Instant;

use rand::{rngs::ThreadRng, Rng};

use crate::{config::Config, Color, Representation, Tone};

mod acknowledgment;
mod clipboard;
mod keys;

pub use acknowledgment::Acknowledgment;
pub use clipboard::{copy_text, Capabilities, Clipboard, CopyMethod, Selection};
pub use keys::{is_regenerate_shortcut, Focus};

/// Label of a copy control while its representation is acknowledged.
pub const COPIED_LABEL: &str = "Copied ✓";

/// Label of a copy control otherwise.
pub const COPY_LABEL: &str = "Copy";

type Observer = Box<dyn FnMut(&Color)>;

/// State machine behind a random color tool.
pub struct Driver<C, R = ThreadRng> {
    config: Config,
    clipboard: C,
    rng: R,
    current: Color,
    generation: u64,
    initialized: bool,
    acknowledgment: Acknowledgment,
    observers: Vec<Observer>,
}

impl<C: Clipboard> Driver<C> {
    /// Create a driver sampling from the thread local random source.
    pub fn new(clipboard: C, config: Config) -> Self {
        Self::with_rng(clipboard, config, rand::thread_rng())
    }
}

impl<C: Clipboard, R: Rng> Driver<C, R> {
    /// Create a driver sampling from `rng`.
    pub fn with_rng(clipboard: C, config: Config, rng: R) -> Self {
        Self {
            current: config.initial,
            config,
            clipboard,
            rng,
            generation: 0,
            initialized: false,
            acknowledgment: Acknowledgment::default(),
            observers: Vec::new(),
        }
    }

    /// The color currently shown.
    pub fn current(&self) -> Color {
        self.current
    }

    /// Number of regenerations so far. Presenters restart their pulse
    /// animation whenever it changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The tone of the current color.
    pub fn tone(&self) -> Tone {
        Tone::classify(&self.current, self.config.tone_threshold)
    }

    /// The current color formatted in `representation`.
    pub fn text(&self, representation: Representation) -> String {
        self.current.format(representation)
    }

    /// A one line description of the current color.
    pub fn describe(&self) -> String {
        format!(
            "Color preview {} (RGB {}) {} tone",
            self.current.to_hex(),
            self.current.to_rgb_string(),
            self.tone()
        )
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The clipboard backend.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Register an observer of the current color. It is called immediately
    /// with the current color and again after every regeneration.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&Color) + 'static) {
        observer(&self.current);
        self.observers.push(Box::new(observer));
    }

    /// Perform the first regeneration. Only the first call has an effect;
    /// returns whether it did.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.regenerate();
        true
    }

    /// Replace the current color with a freshly sampled one.
    pub fn regenerate(&mut self) -> Color {
        self.current = Color::random(&mut self.rng);
        self.generation += 1;

        tracing::debug!(
            color = %self.current,
            generation = self.generation,
            "regenerated color"
        );

        let current = self.current;
        self.observers
            .iter_mut()
            .for_each(|observer| observer(&current));

        current
    }

    /// Handle a key press. Regenerates and returns `true` for a shortcut key
    /// pressed outside of a text entry control.
    pub fn handle_key(&mut self, key: &str, focus: Focus) -> bool {
        if !is_regenerate_shortcut(key, focus) {
            return false;
        }
        self.regenerate();
        true
    }

    /// Copy the current color in `representation`. On success the
    /// representation is acknowledged from `now`, replacing any earlier
    /// acknowledgment. Failures leave the state untouched and are only
    /// logged. Returns whether the copy succeeded.
    pub fn copy(&mut self, representation: Representation, now: Instant) -> bool {
        let text = self.text(representation);

        match copy_text(&mut self.clipboard, &text) {
            Ok(method) => {
                tracing::debug!(%representation, ?method, %text, "copied");
                self.acknowledgment
                    .acknowledge(representation, now, self.config.acknowledgment);
                true
            }
            Err(err) => {
                tracing::warn!(%representation, %err, "copy failed");
                false
            }
        }
    }

    /// The representation acknowledged at `now`, if any.
    pub fn acknowledged(&self, now: Instant) -> Option<Representation> {
        self.acknowledgment.current(now)
    }

    /// Clear an acknowledgment whose window has closed. Returns whether the
    /// visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.acknowledgment.expire(now)
    }

    /// The label of the copy control for `representation` at `now`.
    pub fn copy_label(&self, representation: Representation, now: Instant) -> &'static str {
        if self.acknowledged(now) == Some(representation) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
