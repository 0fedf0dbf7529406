use crate::error::Error;

/// Fixed-capacity byte buffer for textbox contents. The capacity is a hard
/// ceiling fixed at construction; the toolkit mutates contents and length in
/// place and never reallocates.
#[derive(Debug)]
pub struct TextBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl TextBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Seeds the buffer from `text`, truncated to `capacity` if needed.
    pub fn from_str(text: &str, capacity: usize) -> Self {
        let mut buffer = Self::with_capacity(capacity);
        let take = text.len().min(capacity);
        buffer.data[..take].copy_from_slice(&text.as_bytes()[..take]);
        buffer.len = take;
        buffer
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Lossy UTF-8 view for display and clipboard export.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// The single mutation primitive: removes `remove` bytes at `index` and
    /// inserts `insert` in their place, shifting the tail. Rejects the whole
    /// edit with [`Error::BufferOverflow`] if the result would not fit.
    ///
    /// Panics if `index + remove` exceeds the current length.
    pub fn replace(&mut self, index: usize, remove: usize, insert: &[u8]) -> Result<(), Error> {
        assert!(index + remove <= self.len, "replace range out of bounds");

        let needed = self.len - remove + insert.len();
        if needed > self.capacity() {
            return Err(Error::BufferOverflow {
                needed,
                capacity: self.capacity(),
            });
        }

        self.data.copy_within(index + remove..self.len, index + insert.len());
        self.data[index..index + insert.len()].copy_from_slice(insert);
        self.len = needed;
        Ok(())
    }
}
