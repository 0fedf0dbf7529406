use crate::ui::input::{KeyModifiers, Scancode};

/// Maps a physical key plus modifiers to the character it produces, if any.
/// Selected once on [`crate::view::Ui`] construction; swap it out to support
/// a different layout.
pub type KeyboardLayout = fn(Scancode, KeyModifiers) -> Option<char>;

/// US-QWERTY layout.
pub fn us_qwerty(scancode: Scancode, modifiers: KeyModifiers) -> Option<char> {
    use Scancode::*;

    if modifiers.intersects(KeyModifiers::CTRL | KeyModifiers::ALT | KeyModifiers::OS) {
        return None;
    }
    let shift = modifiers.contains(KeyModifiers::SHIFT);

    let ch = match scancode {
        A => 'a', B => 'b', C => 'c', D => 'd', E => 'e', F => 'f', G => 'g',
        H => 'h', I => 'i', J => 'j', K => 'k', L => 'l', M => 'm', N => 'n',
        O => 'o', P => 'p', Q => 'q', R => 'r', S => 's', T => 't', U => 'u',
        V => 'v', W => 'w', X => 'x', Y => 'y', Z => 'z',
        Num1 => if shift { '!' } else { '1' },
        Num2 => if shift { '@' } else { '2' },
        Num3 => if shift { '#' } else { '3' },
        Num4 => if shift { '$' } else { '4' },
        Num5 => if shift { '%' } else { '5' },
        Num6 => if shift { '^' } else { '6' },
        Num7 => if shift { '&' } else { '7' },
        Num8 => if shift { '*' } else { '8' },
        Num9 => if shift { '(' } else { '9' },
        Num0 => if shift { ')' } else { '0' },
        Space => ' ',
        Minus => if shift { '_' } else { '-' },
        Equals => if shift { '+' } else { '=' },
        LeftBracket => if shift { '{' } else { '[' },
        RightBracket => if shift { '}' } else { ']' },
        Backslash => if shift { '|' } else { '\\' },
        Semicolon => if shift { ':' } else { ';' },
        Apostrophe => if shift { '"' } else { '\'' },
        Grave => if shift { '~' } else { '`' },
        Comma => if shift { '<' } else { ',' },
        Period => if shift { '>' } else { '.' },
        Slash => if shift { '?' } else { '/' },
        _ => return None,
    };

    if shift && ch.is_ascii_alphabetic() {
        return Some(ch.to_ascii_uppercase());
    }
    Some(ch)
}
