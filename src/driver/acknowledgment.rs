//! The transient "copied" state.

use std::time::{Duration, Instant};

use crate::Representation;

/// Which representation was copied most recently, until its window expires.
///
/// A new acknowledgment replaces the previous one and restarts the window;
/// nothing is ever cancelled explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Acknowledgment {
    pending: Option<(Representation, Instant)>,
}

impl Acknowledgment {
    /// Acknowledge `representation` from `now` for `window`.
    pub fn acknowledge(&mut self, representation: Representation, now: Instant, window: Duration) {
        self.pending = Some((representation, now + window));
    }

    /// The acknowledged representation at `now`, if its window is still open.
    pub fn current(&self, now: Instant) -> Option<Representation> {
        match self.pending {
            Some((representation, deadline)) if now < deadline => Some(representation),
            _ => None,
        }
    }

    /// Drop an expired acknowledgment. Returns `true` when state changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.pending.is_some() && self.current(now).is_none() {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(1400);

    #[test]
    fn starts_empty() {
        let ack = Acknowledgment::default();
        assert_eq!(ack.current(Instant::now()), None);
        assert_eq!(ack, Acknowledgment::default());
    }

    #[test]
    fn window_is_half_open() {
        let start = Instant::now();
        let mut ack = Acknowledgment::default();
        ack.acknowledge(Representation::Hex, start, WINDOW);

        assert_eq!(ack.current(start), Some(Representation::Hex));
        assert_eq!(
            ack.current(start + Duration::from_millis(1399)),
            Some(Representation::Hex)
        );
        assert_eq!(ack.current(start + WINDOW), None);
    }

    #[test]
    fn later_acknowledgment_wins_and_restarts_window() {
        let start = Instant::now();
        let mut ack = Acknowledgment::default();
        ack.acknowledge(Representation::Hex, start, WINDOW);
        ack.acknowledge(Representation::Rgb, start + Duration::from_millis(1000), WINDOW);

        let after_first = start + Duration::from_millis(1500);
        assert_eq!(ack.current(after_first), Some(Representation::Rgb));
        assert_eq!(ack.current(start + Duration::from_millis(2400)), None);
    }

    #[test]
    fn expire_clears_only_closed_windows() {
        let start = Instant::now();
        let mut ack = Acknowledgment::default();
        assert!(!ack.expire(start));

        ack.acknowledge(Representation::Hsl, start, WINDOW);
        assert!(!ack.expire(start + Duration::from_millis(10)));
        assert!(ack.expire(start + WINDOW));
        assert_eq!(ack, Acknowledgment::default());
    }
}
