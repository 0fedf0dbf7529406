//! prontoui is an immediate mode widget toolkit: the caller redeclares its
//! widgets every frame with explicit rectangles and owns all persistent
//! state, while the toolkit derives visual states, routes input, and emits
//! draw primitives through caller-implemented traits.
//!
//! A frame looks like this:
//!
//! ```no_run
//! use prontoui::geometry::{rect, size};
//! use prontoui::style::Theme;
//! use prontoui::ui::InputFrame;
//! use prontoui::view::{FrameEnv, Ui};
//! # struct Renderer;
//! # impl prontoui::view::surface::DrawSurface for Renderer {
//! #     fn fill_rect(&mut self, _: prontoui::geometry::Rect, _: prontoui::style::Color) {}
//! #     fn draw_glyph(&mut self, _: prontoui::geometry::Point, _: u8, _: prontoui::style::Color) {}
//! # }
//! # impl prontoui::view::surface::GlyphMetrics for Renderer {
//! #     fn glyph_width(&self, _: u8) -> i32 { 8 }
//! #     fn glyph_height(&self, _: u8) -> i32 { 16 }
//! #     fn line_height(&self) -> i32 { 16 }
//! # }
//! # let mut renderer = Renderer;
//! # let metrics = Renderer;
//! let mut ui = Ui::new(Theme::light());
//! let mut input = InputFrame::new();
//! let mut clipboard = prontoui::view::clipboard::SystemClipboard::new()?;
//! loop {
//!     // ... feed host events into `input` ...
//!     let mut frame = ui.begin(&input, FrameEnv {
//!         surface: &mut renderer,
//!         metrics: &metrics,
//!         clipboard: &mut clipboard,
//!         window: size(640, 480),
//!     });
//!     frame.clear();
//!     if frame.button(rect(20, 20, 120, 30), "Quit") {
//!         break;
//!     }
//!     drop(frame);
//!     input.begin();
//! }
//! # Ok::<(), prontoui::Error>(())
//! ```

pub mod error;
pub mod geometry;
pub mod style;
pub mod text;
pub mod ui;
pub mod view;

pub use error::Error;
pub use geometry::{Point, Rect, Size};
pub use style::{Color, Theme};
pub use text::{EditCursor, TextBuffer};
pub use ui::{ControlState, InputFrame, KeyEvent, KeyModifiers, MouseButtons, Scancode};
pub use view::{
    ControlEvents, FrameEnv, SelectState, SliderState, TextboxState, Ui, UiFrame,
};
