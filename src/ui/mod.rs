mod capture;
mod click;
mod input;
mod keymap;

pub use capture::CaptureState;
pub use click::{ClickDetector, ClickKind};
pub use input::{InputFrame, KeyEvent, KeyModifiers, MAX_KEY_EVENTS, MouseButtons, Scancode};
pub use keymap::{KeyboardLayout, us_qwerty};

use crate::geometry::Rect;

/// Visual state of a widget, derived fresh every frame and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Default,
    Hover,
    Active,
    Selected,
}

impl ControlState {
    /// Index into the theme's per-state color/thickness triples. Selected
    /// widgets use the active column.
    pub fn style_index(self) -> usize {
        match self {
            ControlState::Default => 0,
            ControlState::Hover => 1,
            ControlState::Active | ControlState::Selected => 2,
        }
    }
}

/// Classifier for momentary widgets (button, checkbox): no capture, the
/// commit signal is a fresh primary press while hovered.
pub fn momentary_state(rect: Rect, input: &InputFrame) -> (ControlState, bool) {
    let hovered = rect.contains(input.mouse());
    let state = if hovered {
        if input.is_down(MouseButtons::LEFT) {
            ControlState::Active
        } else {
            ControlState::Hover
        }
    } else {
        ControlState::Default
    };
    (state, hovered && input.is_pressed(MouseButtons::LEFT))
}

/// Classifier for captured widgets (slider, select, textbox).
pub fn captured_state(rect: Rect, input: &InputFrame, capture: &mut CaptureState) -> ControlState {
    if capture.update(rect, input) {
        ControlState::Selected
    } else if rect.contains(input.mouse()) {
        ControlState::Hover
    } else {
        ControlState::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point, rect};

    #[test]
    fn momentary_states_follow_hover_and_button() {
        let r = rect(0, 0, 100, 30);
        let mut input = InputFrame::new();

        input.mouse_move(200, 200);
        assert_eq!(momentary_state(r, &input), (ControlState::Default, false));

        input.mouse_move(10, 10);
        assert_eq!(momentary_state(r, &input), (ControlState::Hover, false));

        input.mouse_down(MouseButtons::LEFT);
        assert_eq!(momentary_state(r, &input), (ControlState::Active, true));

        // Held but not newly pressed: active without the click signal.
        input.begin();
        input.mouse_move(10, 10);
        assert_eq!(momentary_state(r, &input), (ControlState::Active, false));
    }

    #[test]
    fn captured_state_reports_selected_while_held() {
        let r = rect(0, 0, 100, 30);
        let mut cap = CaptureState::default();
        let mut input = InputFrame::new();
        input.mouse_move(10, 10);
        input.mouse_down(MouseButtons::LEFT);
        assert_eq!(captured_state(r, &input, &mut cap), ControlState::Selected);

        input.begin();
        input.mouse_move(500, 500);
        assert_eq!(captured_state(r, &input, &mut cap), ControlState::Selected);
    }

    #[test]
    fn selected_maps_to_active_style_column() {
        assert_eq!(ControlState::Selected.style_index(), 2);
        assert_eq!(ControlState::Active.style_index(), 2);
        assert_eq!(ControlState::Hover.style_index(), 1);
        assert_eq!(ControlState::Default.style_index(), 0);
    }
}
