use std::time::{Duration, Instant};

use crate::geometry::Point;

const MULTI_CLICK_WINDOW: Duration = Duration::from_millis(500);

/// How a primary-button press classifies against the recent click history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
    Triple,
}

/// Classifies consecutive primary-button presses at the same point into
/// single/double/triple clicks. Advanced only on a new press; the resulting
/// kind is frame-scoped.
#[derive(Debug, Default)]
pub struct ClickDetector {
    last_point: Point,
    t_double: Option<Instant>,
    t_triple: Option<Instant>,
}

impl ClickDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_press(&mut self, at: Point, now: Instant) -> ClickKind {
        let within = |t: Option<Instant>| {
            t.is_some_and(|t| now.duration_since(t) <= MULTI_CLICK_WINDOW)
        };

        if at == self.last_point && within(self.t_triple) {
            // A fourth click in the window starts over as a single.
            self.t_double = None;
            self.t_triple = None;
            return ClickKind::Triple;
        }
        if at == self.last_point && within(self.t_double) {
            self.t_triple = self.t_double;
            self.t_double = None;
            return ClickKind::Double;
        }

        self.t_double = Some(now);
        self.t_triple = None;
        self.last_point = at;
        ClickKind::Single
    }
}
