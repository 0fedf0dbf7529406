mod color;
mod theme;

pub use color::Color;
pub use theme::{
    ButtonTheme, CheckboxTheme, SelectTheme, SliderTheme, TextboxTheme, Theme,
};
