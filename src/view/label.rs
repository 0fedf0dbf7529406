use crate::geometry::{Rect, point};
use crate::view::UiFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl UiFrame<'_> {
    /// Static text inside `rect`. Purely presentational: never hovers,
    /// never reacts to input.
    pub fn label(&mut self, rect: Rect, text: &str, halign: HAlign, valign: VAlign) {
        let width = self.metrics.text_width(text.as_bytes());
        let height = self.metrics.line_height();
        let x = match halign {
            HAlign::Left => rect.x,
            HAlign::Center => rect.x + (rect.w - width) / 2,
            HAlign::Right => rect.right() - width,
        };
        let y = match valign {
            VAlign::Top => rect.y,
            VAlign::Center => rect.y + (rect.h - height) / 2,
            VAlign::Bottom => rect.bottom() - height,
        };
        self.draw_text(point(x, y), text.as_bytes(), self.theme.label_text);
    }
}
