use log::trace;

use crate::geometry::{Point, Rect};
use crate::ui::input::{InputFrame, MouseButtons};

/// Temporary pointer ownership across frames without a widget identity.
///
/// Capture begins when the primary button goes down over the widget's rect
/// and survives as long as each subsequent frame's rect still contains the
/// point recorded at that instant. A layout change that moves the widget
/// away from the original press point drops capture silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureState {
    held: bool,
    origin: Point,
}

impl CaptureState {
    /// Advances the protocol for this frame's rect and reports whether the
    /// widget owns the pointer.
    pub fn update(&mut self, rect: Rect, input: &InputFrame) -> bool {
        if !self.held {
            if rect.contains(input.mouse()) && input.is_pressed(MouseButtons::LEFT) {
                self.held = true;
                self.origin = input.mouse();
                trace!("capture acquired at {:?}", self.origin);
            }
        } else if !rect.contains(self.origin) {
            trace!("capture lost, rect moved away from {:?}", self.origin);
            self.held = false;
        }
        self.held && rect.contains(self.origin)
    }

    pub fn release(&mut self) {
        if self.held {
            trace!("capture released");
        }
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Screen point recorded when capture began. Meaningful only while held.
    pub fn origin(&self) -> Point {
        self.origin
    }
}
