use crate::error::Error;
use crate::text::buffer::TextBuffer;
use crate::ui::{KeyEvent, KeyModifiers, Scancode};
use crate::view::clipboard::Clipboard;
use crate::view::surface::GlyphMetrics;

/// Caret and selection anchor, as byte offsets into a [`TextBuffer`].
/// `anchor == position` means no selection; the selection span is
/// `[min(anchor, position), max(anchor, position))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditCursor {
    pub position: usize,
    pub anchor: usize,
}

impl EditCursor {
    pub fn at(position: usize) -> Self {
        Self {
            position,
            anchor: position,
        }
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        if self.anchor == self.position {
            return None;
        }
        Some((
            self.anchor.min(self.position),
            self.anchor.max(self.position),
        ))
    }

    pub fn collapse_to(&mut self, position: usize) {
        self.position = position;
        self.anchor = position;
    }

    pub fn clamp(&mut self, len: usize) {
        self.position = self.position.min(len);
        self.anchor = self.anchor.min(len);
    }
}

/// What a key event did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    None,
    Changed,
    Committed,
}

/// The text-edit engine: composes every editing command out of the buffer's
/// single `replace` primitive while keeping cursor and anchor in bounds.
pub struct TextEditor<'a> {
    buffer: &'a mut TextBuffer,
    cursor: &'a mut EditCursor,
}

impl<'a> TextEditor<'a> {
    pub fn new(buffer: &'a mut TextBuffer, cursor: &'a mut EditCursor) -> Self {
        cursor.clamp(buffer.len());
        Self { buffer, cursor }
    }

    /// Replaces the selection (or inserts at the caret) and collapses the
    /// cursor after the inserted bytes. The buffer is untouched on overflow.
    pub fn insert(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let (start, remove) = match self.cursor.selection() {
            Some((start, end)) => (start, end - start),
            None => (self.cursor.position, 0),
        };
        self.buffer.replace(start, remove, bytes)?;
        self.cursor.collapse_to(start + bytes.len());
        Ok(())
    }

    /// Deletes the selection, or the byte behind the caret. No-op at the
    /// buffer start.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor.position == 0 {
            return false;
        }
        let at = self.cursor.position - 1;
        self.buffer
            .replace(at, 1, b"")
            .expect("removal cannot overflow");
        self.cursor.collapse_to(at);
        true
    }

    /// Deletes the selection, or the byte ahead of the caret. No-op at the
    /// buffer end.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor.position >= self.buffer.len() {
            return false;
        }
        self.buffer
            .replace(self.cursor.position, 1, b"")
            .expect("removal cannot overflow");
        self.cursor.anchor = self.cursor.position;
        true
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.cursor.selection() else {
            return false;
        };
        self.buffer
            .replace(start, end - start, b"")
            .expect("removal cannot overflow");
        self.cursor.collapse_to(start);
        true
    }

    /// An unmodified arrow first resolves any selection to its near edge;
    /// only a further press moves the caret. Shift moves the caret alone,
    /// growing or shrinking the selection.
    pub fn move_left(&mut self, shift: bool) {
        if shift {
            self.cursor.position = self.cursor.position.saturating_sub(1);
            return;
        }
        if let Some((start, _)) = self.cursor.selection() {
            self.cursor.collapse_to(start);
            return;
        }
        self.cursor.collapse_to(self.cursor.position.saturating_sub(1));
    }

    pub fn move_right(&mut self, shift: bool) {
        if shift {
            self.cursor.position = (self.cursor.position + 1).min(self.buffer.len());
            return;
        }
        if let Some((_, end)) = self.cursor.selection() {
            self.cursor.collapse_to(end);
            return;
        }
        self.cursor
            .collapse_to((self.cursor.position + 1).min(self.buffer.len()));
    }

    pub fn move_home(&mut self, shift: bool) {
        if shift {
            self.cursor.position = 0;
        } else {
            self.cursor.collapse_to(0);
        }
    }

    pub fn move_end(&mut self, shift: bool) {
        if shift {
            self.cursor.position = self.buffer.len();
        } else {
            self.cursor.collapse_to(self.buffer.len());
        }
    }

    pub fn select_all(&mut self) {
        self.cursor.anchor = 0;
        self.cursor.position = self.buffer.len();
    }

    pub fn selected_bytes(&self) -> Option<&[u8]> {
        let (start, end) = self.cursor.selection()?;
        Some(&self.buffer.as_bytes()[start..end])
    }

    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let Some(bytes) = self.selected_bytes() else {
            return false;
        };
        let text = String::from_utf8_lossy(bytes).into_owned();
        clipboard.set_text(&text);
        true
    }

    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        if !self.copy(clipboard) {
            return false;
        }
        self.delete_selection()
    }

    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool, Error> {
        let Some(text) = clipboard.text() else {
            return Ok(false);
        };
        self.insert(text.as_bytes())?;
        Ok(true)
    }

    /// Applies one key event. `codepoint` is the layout-resolved character
    /// for this event, consulted only after command matching fails.
    pub fn apply_key(
        &mut self,
        event: KeyEvent,
        codepoint: Option<char>,
        clipboard: &mut dyn Clipboard,
    ) -> Result<EditOutcome, Error> {
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let shortcut = event
            .modifiers
            .intersects(KeyModifiers::CTRL | KeyModifiers::OS);

        match event.scancode {
            Scancode::Left => {
                self.move_left(shift);
                return Ok(EditOutcome::None);
            }
            Scancode::Right => {
                self.move_right(shift);
                return Ok(EditOutcome::None);
            }
            Scancode::Home => {
                self.move_home(shift);
                return Ok(EditOutcome::None);
            }
            Scancode::End => {
                self.move_end(shift);
                return Ok(EditOutcome::None);
            }
            Scancode::Backspace => {
                return Ok(if self.backspace() {
                    EditOutcome::Changed
                } else {
                    EditOutcome::None
                });
            }
            Scancode::Delete => {
                return Ok(if self.delete_forward() {
                    EditOutcome::Changed
                } else {
                    EditOutcome::None
                });
            }
            Scancode::Return => return Ok(EditOutcome::Committed),
            Scancode::A if shortcut => {
                self.select_all();
                return Ok(EditOutcome::None);
            }
            Scancode::C if shortcut => {
                self.copy(clipboard);
                return Ok(EditOutcome::None);
            }
            Scancode::X if shortcut => {
                return Ok(if self.cut(clipboard) {
                    EditOutcome::Changed
                } else {
                    EditOutcome::None
                });
            }
            Scancode::V if shortcut => {
                return Ok(if self.paste(clipboard)? {
                    EditOutcome::Changed
                } else {
                    EditOutcome::None
                });
            }
            _ => {}
        }

        if shortcut || event.modifiers.intersects(KeyModifiers::ALT) {
            return Ok(EditOutcome::None);
        }

        match codepoint {
            Some(ch) if (ch as u32) < 256 && ch != '\u{7f}' && !ch.is_control() => {
                self.insert(&[ch as u8])?;
                Ok(EditOutcome::Changed)
            }
            _ => Ok(EditOutcome::None),
        }
    }
}

/// Maps a screen x-coordinate to a byte offset in `text` laid out from
/// `origin_x`, snapping at each glyph's midpoint. Left of all text is 0,
/// right of all text is `text.len()`.
pub fn hit_test(metrics: &dyn GlyphMetrics, text: &[u8], origin_x: i32, target_x: i32) -> usize {
    let mut x = origin_x;
    for (index, &glyph) in text.iter().enumerate() {
        let width = metrics.glyph_width(glyph);
        if target_x < x + width / 2 {
            return index;
        }
        x += width;
    }
    text.len()
}

/// Word boundary for double-click selection: a space, or ASCII punctuation
/// other than underscore.
pub fn is_stop_byte(byte: u8) -> bool {
    byte == b' ' || (byte.is_ascii_punctuation() && byte != b'_')
}

/// Span of the word enclosing `index`: back to the previous stop byte,
/// forward to the next one.
pub fn word_bounds(text: &[u8], index: usize) -> (usize, usize) {
    let index = index.min(text.len());
    let start = text[..index]
        .iter()
        .rposition(|&b| is_stop_byte(b))
        .map_or(0, |i| i + 1);
    let end = text[index..]
        .iter()
        .position(|&b| is_stop_byte(b))
        .map_or(text.len(), |i| index + i);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::clipboard::Clipboard;

    #[derive(Default)]
    struct MemClipboard(Option<String>);

    impl Clipboard for MemClipboard {
        fn text(&mut self) -> Option<String> {
            self.0.clone()
        }

        fn set_text(&mut self, text: &str) {
            self.0 = Some(text.to_string());
        }
    }

    struct FixedMetrics;

    impl GlyphMetrics for FixedMetrics {
        fn glyph_width(&self, _glyph: u8) -> i32 {
            8
        }

        fn glyph_height(&self, _glyph: u8) -> i32 {
            16
        }

        fn line_height(&self) -> i32 {
            16
        }
    }

    fn key(scancode: Scancode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            scancode,
            modifiers,
        }
    }

    fn invariant_holds(buffer: &TextBuffer, cursor: &EditCursor) -> bool {
        cursor.anchor <= buffer.len()
            && cursor.position <= buffer.len()
            && buffer.len() <= buffer.capacity()
    }

    #[test]
    fn insert_replaces_the_selection() {
        let mut buf = TextBuffer::from_str("hello world", 32);
        let mut cur = EditCursor {
            anchor: 6,
            position: 11,
        };
        TextEditor::new(&mut buf, &mut cur).insert(b"rust").unwrap();
        assert_eq!(buf.as_bytes(), b"hello rust");
        assert_eq!(cur, EditCursor::at(10));
        assert!(invariant_holds(&buf, &cur));
    }

    #[test]
    fn unmodified_arrow_collapses_selection_before_moving() {
        let mut buf = TextBuffer::from_str("abcdef", 32);
        let mut cur = EditCursor {
            anchor: 4,
            position: 1,
        };
        TextEditor::new(&mut buf, &mut cur).move_left(false);
        assert_eq!(cur, EditCursor::at(1));

        cur = EditCursor {
            anchor: 1,
            position: 4,
        };
        TextEditor::new(&mut buf, &mut cur).move_right(false);
        assert_eq!(cur, EditCursor::at(4));
    }

    #[test]
    fn shift_arrows_move_only_the_caret() {
        let mut buf = TextBuffer::from_str("abcdef", 32);
        let mut cur = EditCursor::at(3);
        let mut ed = TextEditor::new(&mut buf, &mut cur);
        ed.move_right(true);
        ed.move_right(true);
        assert_eq!(cur.anchor, 3);
        assert_eq!(cur.position, 5);

        let mut ed = TextEditor::new(&mut buf, &mut cur);
        ed.move_left(true);
        ed.move_left(true);
        ed.move_left(true);
        assert_eq!(cur.anchor, 3);
        assert_eq!(cur.position, 2);
    }

    #[test]
    fn arrows_clamp_at_buffer_edges() {
        let mut buf = TextBuffer::from_str("ab", 8);
        let mut cur = EditCursor::at(0);
        TextEditor::new(&mut buf, &mut cur).move_left(false);
        assert_eq!(cur, EditCursor::at(0));

        cur = EditCursor::at(2);
        TextEditor::new(&mut buf, &mut cur).move_right(false);
        assert_eq!(cur, EditCursor::at(2));
        assert!(invariant_holds(&buf, &cur));
    }

    #[test]
    fn backspace_and_delete_are_noops_at_the_edges() {
        let mut buf = TextBuffer::from_str("ab", 8);
        let mut cur = EditCursor::at(0);
        assert!(!TextEditor::new(&mut buf, &mut cur).backspace());

        cur = EditCursor::at(2);
        assert!(!TextEditor::new(&mut buf, &mut cur).delete_forward());
        assert_eq!(buf.as_bytes(), b"ab");
    }

    #[test]
    fn select_all_then_delete_empties_the_buffer() {
        let mut buf = TextBuffer::from_str("hello world", 32);
        let mut cur = EditCursor::at(3);
        let mut ed = TextEditor::new(&mut buf, &mut cur);
        ed.select_all();
        assert!(ed.backspace());
        assert_eq!(buf.len(), 0);
        assert_eq!(cur, EditCursor::at(0));
    }

    #[test]
    fn shift_end_copy_paste_round_trips() {
        // "Hello world", caret at 5: Shift+End selects " world"; Ctrl+C then
        // Ctrl+V pastes the selection over itself, leaving the buffer as it
        // was.
        let mut buf = TextBuffer::from_str("Hello world", 64);
        let mut cur = EditCursor::at(5);
        let mut clip = MemClipboard::default();

        let mut ed = TextEditor::new(&mut buf, &mut cur);
        ed.apply_key(key(Scancode::End, KeyModifiers::SHIFT), None, &mut clip)
            .unwrap();
        assert_eq!((cur.anchor, cur.position), (5, 11));

        let mut ed = TextEditor::new(&mut buf, &mut cur);
        ed.apply_key(key(Scancode::C, KeyModifiers::CTRL), None, &mut clip)
            .unwrap();
        let mut ed = TextEditor::new(&mut buf, &mut cur);
        ed.apply_key(key(Scancode::V, KeyModifiers::CTRL), None, &mut clip)
            .unwrap();
        assert_eq!(buf.as_bytes(), b"Hello world");
        assert!(invariant_holds(&buf, &cur));
    }

    #[test]
    fn cut_removes_and_exports_the_selection() {
        let mut buf = TextBuffer::from_str("Hello world", 64);
        let mut cur = EditCursor {
            anchor: 5,
            position: 11,
        };
        let mut clip = MemClipboard::default();
        assert!(TextEditor::new(&mut buf, &mut cur).cut(&mut clip));
        assert_eq!(buf.as_bytes(), b"Hello");
        assert_eq!(clip.0.as_deref(), Some(" world"));
    }

    #[test]
    fn paste_overflow_is_rejected_whole() {
        let mut buf = TextBuffer::from_str("abc", 4);
        let mut cur = EditCursor::at(3);
        let mut clip = MemClipboard(Some("0123456".to_string()));
        let err = TextEditor::new(&mut buf, &mut cur)
            .paste(&mut clip)
            .unwrap_err();
        assert!(matches!(err, Error::BufferOverflow { .. }));
        assert_eq!(buf.as_bytes(), b"abc");
        assert_eq!(cur, EditCursor::at(3));
    }

    #[test]
    fn printable_codepoints_insert_a_byte() {
        let mut buf = TextBuffer::from_str("ac", 8);
        let mut cur = EditCursor::at(1);
        let mut clip = MemClipboard::default();
        let outcome = TextEditor::new(&mut buf, &mut cur)
            .apply_key(key(Scancode::B, KeyModifiers::empty()), Some('b'), &mut clip)
            .unwrap();
        assert_eq!(outcome, EditOutcome::Changed);
        assert_eq!(buf.as_bytes(), b"abc");
    }

    #[test]
    fn return_reports_commit() {
        let mut buf = TextBuffer::from_str("x", 8);
        let mut cur = EditCursor::at(1);
        let mut clip = MemClipboard::default();
        let outcome = TextEditor::new(&mut buf, &mut cur)
            .apply_key(key(Scancode::Return, KeyModifiers::empty()), None, &mut clip)
            .unwrap();
        assert_eq!(outcome, EditOutcome::Committed);
    }

    #[test]
    fn hit_test_snaps_at_glyph_midpoints() {
        let metrics = FixedMetrics;
        let text = b"abcd";
        assert_eq!(hit_test(&metrics, text, 100, 50), 0);
        assert_eq!(hit_test(&metrics, text, 100, 103), 0);
        assert_eq!(hit_test(&metrics, text, 100, 104), 1);
        assert_eq!(hit_test(&metrics, text, 100, 117), 2);
        assert_eq!(hit_test(&metrics, text, 100, 500), 4);
    }

    #[test]
    fn word_bounds_select_the_enclosing_word() {
        let text = b"quick brown fox";
        let at_b = 6;
        assert_eq!(word_bounds(text, at_b), (6, 11));
        assert_eq!(word_bounds(text, 0), (0, 5));
        assert_eq!(word_bounds(text, 13), (12, 15));
    }

    #[test]
    fn underscore_is_not_a_word_boundary() {
        let text = b"foo_bar baz";
        assert_eq!(word_bounds(text, 2), (0, 7));
        assert!(is_stop_byte(b'.'));
        assert!(!is_stop_byte(b'_'));
        assert!(!is_stop_byte(b'7'));
    }
}
