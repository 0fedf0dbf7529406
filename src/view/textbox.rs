use log::warn;

use crate::geometry::{Rect, point, rect};
use crate::text::{EditCursor, EditOutcome, TextBuffer, TextEditor, hit_test, word_bounds};
use crate::ui::{CaptureState, ClickKind, MouseButtons, captured_state};
use crate::view::{ControlEvents, UiFrame};

/// Per-textbox state owned by the caller: focus capture, caret, and the
/// flag that pins a double/triple-click selection against drag updates.
#[derive(Debug, Default)]
pub struct TextboxState {
    capture: CaptureState,
    pub cursor: EditCursor,
    drag_lock: bool,
}

impl UiFrame<'_> {
    /// Single-line text editor over a caller-owned [`TextBuffer`]. Focus is
    /// taken by a primary press inside the rect and kept after release
    /// until a press lands elsewhere. Inserts that would overflow the
    /// buffer are dropped with a warning.
    pub fn textbox(
        &mut self,
        r: Rect,
        state: &mut TextboxState,
        buffer: &mut TextBuffer,
    ) -> ControlEvents {
        let style = &self.theme.textbox;
        let mut events = ControlEvents::empty();

        state.cursor.clamp(buffer.len());

        let was_focused = state.capture.is_held();
        let pressed = self.input.is_pressed(MouseButtons::LEFT);
        if pressed && !r.contains(self.input.mouse()) {
            state.capture.release();
        }
        let vs = captured_state(r, self.input, &mut state.capture);
        let focused = state.capture.is_held();
        let i = vs.style_index();

        let text_x = r.x + style.padding_x;

        if focused {
            if pressed {
                if !was_focused {
                    events |= ControlEvents::CLICKED;
                }
                let index = hit_test(
                    self.metrics,
                    buffer.as_bytes(),
                    text_x,
                    self.input.mouse().x,
                );
                match self.click {
                    Some(ClickKind::Triple) => {
                        state.cursor.anchor = 0;
                        state.cursor.position = buffer.len();
                        state.drag_lock = true;
                    }
                    Some(ClickKind::Double) => {
                        let (start, end) = word_bounds(buffer.as_bytes(), index);
                        state.cursor.anchor = start;
                        state.cursor.position = end;
                        state.drag_lock = true;
                    }
                    _ => {
                        state.cursor.collapse_to(index);
                        state.drag_lock = false;
                    }
                }
            } else if self.input.is_down(MouseButtons::LEFT) && !state.drag_lock {
                // Drag extends from the anchor set at press time.
                state.cursor.position = hit_test(
                    self.metrics,
                    buffer.as_bytes(),
                    text_x,
                    self.input.mouse().x,
                );
            }
            if self.input.is_released(MouseButtons::LEFT) {
                state.drag_lock = false;
            }

            for &event in self.input.keys() {
                let codepoint = (self.layout)(event.scancode, event.modifiers);
                let mut editor = TextEditor::new(buffer, &mut state.cursor);
                match editor.apply_key(event, codepoint, self.clipboard) {
                    Ok(EditOutcome::Changed) => events |= ControlEvents::CHANGED,
                    Ok(EditOutcome::Committed) => events |= ControlEvents::COMMITTED,
                    Ok(EditOutcome::None) => {}
                    Err(err) => warn!("textbox edit rejected: {err}"),
                }
            }
        }

        self.surface.fill_rect(r, style.inner[i]);
        self.surface
            .draw_border(r, style.border_thickness[i], style.border[i]);

        let line_height = self.metrics.line_height();
        let text_y = r.y + (r.h - line_height) / 2;
        let bytes = buffer.as_bytes();
        let selection = if focused { state.cursor.selection() } else { None };

        if let Some((start, end)) = selection {
            let x0 = text_x + self.metrics.text_width(&bytes[..start]);
            let width = self.metrics.text_width(&bytes[start..end]);
            self.surface
                .fill_rect(rect(x0, text_y, width, line_height), style.selection_color);
        }

        let mut x = text_x;
        for (index, &glyph) in bytes.iter().enumerate() {
            let color = match selection {
                Some((start, end)) if index >= start && index < end => style.selection_text_color,
                _ => style.text[i],
            };
            self.surface.draw_glyph(point(x, text_y), glyph, color);
            x += self.metrics.glyph_width(glyph);
        }

        if focused {
            let caret_x = text_x + self.metrics.text_width(&bytes[..state.cursor.position]);
            let c = style.cursor;
            self.surface.fill_rect(
                rect(caret_x + c.x, text_y + c.y, c.w, line_height + c.h),
                style.cursor_color,
            );
        }

        events
    }
}
