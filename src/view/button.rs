use crate::geometry::{Rect, point};
use crate::ui::momentary_state;
use crate::view::UiFrame;

impl UiFrame<'_> {
    /// Push button with centered caption. Returns true on the frame of a
    /// fresh primary press while hovered; holding does not repeat.
    pub fn button(&mut self, rect: Rect, text: &str) -> bool {
        let (state, clicked) = momentary_state(rect, self.input);
        let i = state.style_index();
        let style = &self.theme.button;

        self.surface.fill_rect(rect, style.inner[i]);
        self.surface
            .draw_border(rect, style.border_thickness[i], style.border[i]);

        let width = self.metrics.text_width(text.as_bytes());
        let at = point(
            rect.x + (rect.w - width) / 2,
            rect.y + (rect.h - self.metrics.line_height()) / 2,
        );
        self.draw_text(at, text.as_bytes(), style.text[i]);

        clicked
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{rect, size};
    use crate::style::Theme;
    use crate::ui::{InputFrame, MouseButtons};
    use crate::view::testkit::{FixedMetrics, MemClipboard, RecordingSurface};
    use crate::view::{FrameEnv, Ui};

    fn run_button(input: &InputFrame) -> (bool, RecordingSurface) {
        let mut ui = Ui::new(Theme::light());
        let mut surface = RecordingSurface::default();
        let mut clip = MemClipboard::default();
        let mut frame = ui.begin(
            input,
            FrameEnv {
                surface: &mut surface,
                metrics: &FixedMetrics,
                clipboard: &mut clip,
                window: size(640, 480),
            },
        );
        let clicked = frame.button(rect(10, 10, 120, 30), "Ok");
        drop(frame);
        (clicked, surface)
    }

    #[test]
    fn press_inside_clicks_once() {
        let mut input = InputFrame::new();
        input.mouse_move(50, 20);
        input.mouse_down(MouseButtons::LEFT);
        let (clicked, _) = run_button(&input);
        assert!(clicked);

        // Still held the next frame: no repeat.
        input.begin();
        input.mouse_move(50, 20);
        let (clicked, _) = run_button(&input);
        assert!(!clicked);
    }

    #[test]
    fn press_outside_does_nothing() {
        let mut input = InputFrame::new();
        input.mouse_move(300, 300);
        input.mouse_down(MouseButtons::LEFT);
        let (clicked, _) = run_button(&input);
        assert!(!clicked);
    }

    #[test]
    fn hover_uses_the_hover_fill() {
        let mut input = InputFrame::new();
        input.mouse_move(50, 20);
        let (_, surface) = run_button(&input);
        let theme = Theme::light();
        assert_eq!(surface.fills[0].1, theme.button.inner[1]);
    }
}
