mod button;
mod checkbox;
pub mod clipboard;
mod label;
mod select;
mod slider;
pub mod surface;
mod textbox;

pub use label::{HAlign, VAlign};
pub use select::SelectState;
pub use slider::SliderState;
pub use textbox::TextboxState;

use std::time::Instant;

use bitflags::bitflags;

use crate::geometry::{Point, Size};
use crate::style::{Color, Theme};
use crate::ui::{ClickDetector, ClickKind, InputFrame, KeyboardLayout, MouseButtons, us_qwerty};

bitflags! {
    /// What the textbox did this frame. `COMMITTED` implies the caller
    /// should act on the buffer contents.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ControlEvents: u8 {
        /// The widget gained focus from a primary press.
        const CLICKED = 1;
        /// The buffer contents changed.
        const CHANGED = 2;
        /// Return was pressed while focused.
        const COMMITTED = 4;
    }
}

/// Long-lived toolkit handle. Owns the theme, the keyboard layout, and the
/// multi-click detector; everything per-frame lives in [`UiFrame`].
pub struct Ui {
    theme: Theme,
    layout: KeyboardLayout,
    clicks: ClickDetector,
}

/// Caller-supplied services for one frame: the render target, font
/// measurements, the clipboard, and the window size (used for dropdown
/// flip-up placement).
pub struct FrameEnv<'a> {
    pub surface: &'a mut dyn surface::DrawSurface,
    pub metrics: &'a dyn surface::GlyphMetrics,
    pub clipboard: &'a mut dyn clipboard::Clipboard,
    pub window: Size,
}

impl Ui {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            layout: us_qwerty,
            clicks: ClickDetector::new(),
        }
    }

    /// Replaces the scancode-to-character mapping used by text widgets.
    pub fn with_layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Starts a frame. Widgets are declared on the returned [`UiFrame`] in
    /// paint order; dropping it ends the frame.
    pub fn begin<'a>(&'a mut self, input: &'a InputFrame, env: FrameEnv<'a>) -> UiFrame<'a> {
        self.begin_at(input, env, Instant::now())
    }

    fn begin_at<'a>(
        &'a mut self,
        input: &'a InputFrame,
        env: FrameEnv<'a>,
        now: Instant,
    ) -> UiFrame<'a> {
        let click = if input.is_pressed(MouseButtons::LEFT) {
            Some(self.clicks.on_press(input.mouse(), now))
        } else {
            None
        };
        UiFrame {
            theme: &self.theme,
            layout: self.layout,
            input,
            surface: env.surface,
            metrics: env.metrics,
            clipboard: env.clipboard,
            window: env.window,
            click,
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// One frame of widget declarations. Borrows the [`Ui`] and the caller's
/// [`FrameEnv`] for the duration of the frame.
pub struct UiFrame<'a> {
    theme: &'a Theme,
    layout: KeyboardLayout,
    input: &'a InputFrame,
    surface: &'a mut dyn surface::DrawSurface,
    metrics: &'a dyn surface::GlyphMetrics,
    clipboard: &'a mut dyn clipboard::Clipboard,
    window: Size,
    /// Kind of the primary press that started this frame, if any.
    click: Option<ClickKind>,
}

impl UiFrame<'_> {
    /// Clears the window to the theme background. Call first if the host
    /// does not clear on its own.
    pub fn clear(&mut self) {
        let full = crate::geometry::rect(0, 0, self.window.w, self.window.h);
        self.surface.fill_rect(full, self.theme.window_background);
    }

    pub(crate) fn draw_text(&mut self, at: Point, text: &[u8], color: Color) {
        let mut x = at.x;
        for &glyph in text {
            self.surface.draw_glyph(crate::geometry::point(x, at.y), glyph, color);
            x += self.metrics.glyph_width(glyph);
        }
    }
}
