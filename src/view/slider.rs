use crate::geometry::{Rect, rect};
use crate::ui::{CaptureState, MouseButtons, captured_state};
use crate::view::UiFrame;

/// Per-slider state owned by the caller and passed back every frame.
#[derive(Debug, Default)]
pub struct SliderState {
    capture: CaptureState,
}

impl UiFrame<'_> {
    /// Horizontal slider mapping the thumb position over `[min, max]`.
    /// Dragging holds capture until the primary button is released; returns
    /// true on frames where `value` changed.
    pub fn slider(
        &mut self,
        r: Rect,
        state: &mut SliderState,
        value: &mut f64,
        min: f64,
        max: f64,
    ) -> bool {
        let style = &self.theme.slider;
        let vs = captured_state(r, self.input, &mut state.capture);
        let i = vs.style_index();

        // Pixel range the thumb's left edge travels over.
        let track = (r.w - style.thumb_width).max(1);

        let mut changed = false;
        if state.capture.is_held() {
            let local = self.input.mouse().x - r.x - style.thumb_width / 2;
            let ratio = (f64::from(local) / f64::from(track)).clamp(0.0, 1.0);
            let next = min + ratio * (max - min);
            if next != *value {
                *value = next;
                changed = true;
            }
        }
        if self.input.is_released(MouseButtons::LEFT) {
            state.capture.release();
        }

        let ratio = if max > min {
            ((*value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let thumb_x = r.x + (ratio * f64::from(track)).round() as i32;

        let rail = rect(
            r.x,
            r.y + (r.h - style.rail_height) / 2,
            r.w,
            style.rail_height,
        );
        self.surface.fill_rect(rail, style.rail[i]);
        self.surface
            .fill_rect(rect(thumb_x, r.y, style.thumb_width, r.h), style.thumb[i]);

        changed
    }
}
