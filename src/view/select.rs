use crate::geometry::{Rect, point, rect};
use crate::ui::{CaptureState, ControlState, MouseButtons, captured_state};
use crate::view::UiFrame;

/// Per-dropdown state owned by the caller. Capture held means the list is
/// expanded.
#[derive(Debug, Default)]
pub struct SelectState {
    capture: CaptureState,
}

impl UiFrame<'_> {
    /// Dropdown over a non-empty item list. A press on the closed control
    /// expands up to `theme.select.page_items` rows below it (above when
    /// there is no room below and enough above); a press on a row writes
    /// its index into `current` and returns true. Any press while open
    /// collapses the list.
    pub fn select(
        &mut self,
        r: Rect,
        state: &mut SelectState,
        items: &[&str],
        current: &mut usize,
    ) -> bool {
        assert!(!items.is_empty(), "select needs at least one item");
        let style = &self.theme.select;
        *current = (*current).min(items.len() - 1);

        let line_height = self.metrics.line_height();
        let item_h = line_height + 2 * style.item_padding;
        let page = items.len().min(style.page_items);
        let page_h = page as i32 * item_h;
        let open_up = r.bottom() + page_h > self.window.h && r.y - page_h >= 0;
        let list_y = if open_up { r.y - page_h } else { r.bottom() };
        let list_rect = rect(r.x, list_y, r.w, page_h);

        let was_open = state.capture.is_held();
        let pressed = self.input.is_pressed(MouseButtons::LEFT);
        let mut changed = false;

        let vs;
        let open;
        if was_open && pressed {
            let m = self.input.mouse();
            if list_rect.contains(m) {
                let row = ((m.y - list_y) / item_h) as usize;
                if row < page && *current != row {
                    *current = row;
                    changed = true;
                }
            }
            // Any press while open collapses the list, including one on
            // the control itself.
            state.capture.release();
            open = false;
            vs = if r.contains(m) {
                ControlState::Hover
            } else {
                ControlState::Default
            };
        } else {
            vs = captured_state(r, self.input, &mut state.capture);
            open = state.capture.is_held();
        }
        let i = vs.style_index();

        self.surface.fill_rect(r, style.inner[i]);
        self.surface
            .draw_border(r, style.border_thickness[i], style.border[i]);
        let text_y = r.y + (r.h - line_height) / 2;
        self.draw_text(
            point(r.x + style.padding_x, text_y),
            items[*current].as_bytes(),
            style.text[i],
        );

        if open {
            for row in 0..page {
                let row_rect = rect(r.x, list_y + row as i32 * item_h, r.w, item_h);
                let hot = usize::from(row == *current);
                self.surface.fill_rect(row_rect, style.item_inner[hot]);
                self.draw_text(
                    point(r.x + style.padding_x, row_rect.y + style.item_padding),
                    items[row].as_bytes(),
                    style.item_text[hot],
                );
            }
            self.surface.draw_border(
                list_rect,
                style.page_border_thickness,
                style.page_border_color,
            );
        }

        changed
    }
}
