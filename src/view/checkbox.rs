use crate::geometry::{Rect, point};
use crate::ui::momentary_state;
use crate::view::UiFrame;
use crate::view::surface::ICON_CHECK;

impl UiFrame<'_> {
    /// Toggle box. Flips `checked` on a fresh primary press while hovered
    /// and returns true on that frame.
    pub fn checkbox(&mut self, rect: Rect, checked: &mut bool) -> bool {
        let (state, clicked) = momentary_state(rect, self.input);
        if clicked {
            *checked = !*checked;
        }
        let i = state.style_index();
        let style = &self.theme.checkbox;

        self.surface.fill_rect(rect, style.inner[i]);
        self.surface
            .draw_border(rect, style.border_thickness[i], style.border[i]);

        if *checked {
            let at = point(
                rect.x + (rect.w - self.metrics.glyph_width(ICON_CHECK)) / 2,
                rect.y + (rect.h - self.metrics.glyph_height(ICON_CHECK)) / 2,
            );
            self.surface.draw_glyph(at, ICON_CHECK, style.icon[i]);
        }

        clicked
    }
}
