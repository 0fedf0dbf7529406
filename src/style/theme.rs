use crate::geometry::{Rect, rect};
use crate::style::Color;

/// Read-only styling configuration, supplied by the caller and borrowed by
/// every widget call. Per-state arrays are indexed by
/// [`crate::ui::ControlState::style_index`]: 0 = default, 1 = hover,
/// 2 = active/selected.
#[derive(Debug, Clone)]
pub struct Theme {
    pub window_background: Color,
    pub label_text: Color,
    pub button: ButtonTheme,
    pub checkbox: CheckboxTheme,
    pub textbox: TextboxTheme,
    pub slider: SliderTheme,
    pub select: SelectTheme,
}

#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub text: [Color; 3],
    pub inner: [Color; 3],
    pub border: [Color; 3],
    pub border_thickness: [i32; 3],
}

#[derive(Debug, Clone)]
pub struct CheckboxTheme {
    pub icon: [Color; 3],
    pub inner: [Color; 3],
    pub border: [Color; 3],
    pub border_thickness: [i32; 3],
}

#[derive(Debug, Clone)]
pub struct TextboxTheme {
    pub text: [Color; 3],
    pub inner: [Color; 3],
    pub border: [Color; 3],
    pub border_thickness: [i32; 3],
    pub padding_x: i32,
    /// Caret geometry relative to the caret point: `x`/`y` offset the top-left
    /// corner, `w` is the caret width, `h` is added to the font line height.
    pub cursor: Rect,
    pub cursor_color: Color,
    pub selection_color: Color,
    pub selection_text_color: Color,
}

#[derive(Debug, Clone)]
pub struct SliderTheme {
    pub thumb: [Color; 3],
    pub rail: [Color; 3],
    pub thumb_width: i32,
    pub rail_height: i32,
}

#[derive(Debug, Clone)]
pub struct SelectTheme {
    pub text: [Color; 3],
    pub inner: [Color; 3],
    pub border: [Color; 3],
    pub border_thickness: [i32; 3],
    pub page_border_color: Color,
    pub page_border_thickness: i32,
    /// Row colors: index 0 for plain rows, 1 for the row of the current item.
    pub item_inner: [Color; 2],
    pub item_text: [Color; 2],
    pub item_padding: i32,
    pub page_items: usize,
    pub padding_x: i32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            window_background: Color(0xf0f0f0),
            label_text: Color(0x000000),
            button: ButtonTheme {
                text: [Color(0x000000); 3],
                inner: [Color(0xe1e1e1), Color(0xdddddd), Color(0xcccccc)],
                border: [Color(0xadadad), Color(0x777777), Color(0x52a9fd)],
                border_thickness: [1, 1, 2],
            },
            checkbox: CheckboxTheme {
                icon: [Color(0x00a000); 3],
                inner: [Color(0xFFFFFF); 3],
                border: [Color(0xadadad), Color(0x777777), Color(0x52a9fd)],
                border_thickness: [1, 1, 2],
            },
            textbox: TextboxTheme {
                text: [Color(0x000000); 3],
                inner: [Color(0xFFFFFF); 3],
                border: [Color(0xadadad), Color(0x777777), Color(0x52a9fd)],
                border_thickness: [1, 1, 2],
                padding_x: 6,
                cursor: rect(-1, -1, 1, 2),
                cursor_color: Color(0x000000),
                selection_color: Color(0x3399ff),
                selection_text_color: Color(0xffffff),
            },
            slider: SliderTheme {
                thumb: [Color(0x999999), Color(0x888888), Color(0x52a9fd)],
                rail: [Color(0xcccccc), Color(0xbbbbbb), Color(0xaaaaaa)],
                thumb_width: 6,
                rail_height: 4,
            },
            select: SelectTheme {
                text: [Color(0x000000); 3],
                inner: [Color(0xe1e1e1), Color(0xdddddd), Color(0xcccccc)],
                border: [Color(0xadadad), Color(0x777777), Color(0x52a9fd)],
                border_thickness: [1, 1, 2],
                page_border_color: Color(0x333333),
                page_border_thickness: 1,
                item_inner: [Color(0xFFFFFF), Color(0x3399ff)],
                item_text: [Color(0x000000), Color(0xFFFFFF)],
                item_padding: 3,
                page_items: 5,
                padding_x: 10,
            },
        }
    }

    pub fn dark() -> Self {
        let text = [Color(0xff8200); 3];
        let inner = [Color(0x310000), Color(0x7b0000), Color(0x510000)];
        let border = [Color(0x7b0000), Color(0xff8200), Color(0xff8200)];
        let border_thickness = [2, 2, 2];

        Self {
            window_background: Color(0x100000),
            label_text: Color(0xff8200),
            button: ButtonTheme {
                text,
                inner,
                border,
                border_thickness,
            },
            checkbox: CheckboxTheme {
                icon: text,
                inner,
                border,
                border_thickness,
            },
            textbox: TextboxTheme {
                text,
                inner,
                border,
                border_thickness,
                padding_x: 6,
                cursor: rect(-1, -1, 1, 2),
                cursor_color: Color(0xff8200),
                selection_color: Color(0xff8200),
                selection_text_color: Color(0x310000),
            },
            slider: SliderTheme {
                thumb: [Color(0x7b0000), Color(0xff8200), Color(0xff8200)],
                rail: [Color(0x310000); 3],
                thumb_width: 6,
                rail_height: 4,
            },
            select: SelectTheme {
                text,
                inner,
                border,
                border_thickness,
                page_border_color: Color(0x7b0000),
                page_border_thickness: 1,
                item_inner: [Color(0x310000), Color(0xff8200)],
                item_text: [Color(0xff8200), Color(0x310000)],
                item_padding: 3,
                page_items: 5,
                padding_x: 10,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
