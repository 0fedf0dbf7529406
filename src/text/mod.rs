mod buffer;
mod editor;

pub use buffer::TextBuffer;
pub use editor::{EditCursor, EditOutcome, TextEditor, hit_test, is_stop_byte, word_bounds};
