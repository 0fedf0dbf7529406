use thiserror::Error;

/// Errors surfaced by fallible toolkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An insert would grow a [`crate::text::TextBuffer`] past its fixed
    /// capacity. The buffer is left untouched.
    #[error("text does not fit: need {needed} bytes, capacity is {capacity}")]
    BufferOverflow { needed: usize, capacity: usize },

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}
