use log::warn;
use smallvec::SmallVec;

use crate::geometry::{Point, point};

/// Key events accepted per frame; later events are dropped.
pub const MAX_KEY_EVENTS: usize = 32;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MouseButtons: u8 {
        const LEFT = 1;
        const MIDDLE = 2;
        const RIGHT = 4;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 1;
        const CTRL = 2;
        const ALT = 4;
        const ALTGR = 8;
        const OS = 16;
    }
}

/// Physical key identity, independent of the active keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scancode {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
    Space, Minus, Equals, LeftBracket, RightBracket, Backslash,
    Semicolon, Apostrophe, Grave, Comma, Period, Slash,
    Return, Tab, Backspace, Delete, Escape,
    Left, Right, Up, Down, Home, End, PageUp, PageDown,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub scancode: Scancode,
    pub modifiers: KeyModifiers,
}

/// Per-frame snapshot of accumulated OS input. The event pump fills one of
/// these between `begin()` and the widget calls; every widget in the frame
/// observes the same snapshot.
#[derive(Debug, Default)]
pub struct InputFrame {
    mouse: Point,
    scroll: Point,
    pressed: MouseButtons,
    released: MouseButtons,
    down: MouseButtons,
    keys: SmallVec<[KeyEvent; MAX_KEY_EVENTS]>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the per-frame accumulators. Held-button state survives.
    pub fn begin(&mut self) {
        self.scroll = point(0, 0);
        self.pressed = MouseButtons::empty();
        self.released = MouseButtons::empty();
        self.keys.clear();
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) {
        self.mouse = point(x, y);
    }

    pub fn mouse_down(&mut self, button: MouseButtons) {
        self.pressed |= button;
        self.down |= button;
    }

    pub fn mouse_up(&mut self, button: MouseButtons) {
        self.released |= button;
        self.down -= button;
    }

    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.scroll = point(self.scroll.x + dx, self.scroll.y + dy);
    }

    pub fn key(&mut self, scancode: Scancode, modifiers: KeyModifiers) {
        if self.keys.len() >= MAX_KEY_EVENTS {
            warn!("key event queue full, dropping {scancode:?}");
            return;
        }
        self.keys.push(KeyEvent {
            scancode,
            modifiers,
        });
    }

    pub fn mouse(&self) -> Point {
        self.mouse
    }

    pub fn scroll_delta(&self) -> Point {
        self.scroll
    }

    pub fn is_pressed(&self, button: MouseButtons) -> bool {
        self.pressed.intersects(button)
    }

    pub fn is_released(&self, button: MouseButtons) -> bool {
        self.released.intersects(button)
    }

    pub fn is_down(&self, button: MouseButtons) -> bool {
        self.down.intersects(button)
    }

    pub fn keys(&self) -> &[KeyEvent] {
        &self.keys
    }
}
