use log::warn;

use crate::error::Error;

/// Text exchange with the host clipboard, consumed by the textbox's
/// copy/cut/paste commands.
pub trait Clipboard {
    fn text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// OS clipboard backed by `arboard`. Read/write failures degrade to
/// empty-clipboard behavior with a warning rather than aborting the frame.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn text(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(err) => {
                warn!("clipboard read failed: {err}");
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Err(err) = self.inner.set_text(text.to_string()) {
            warn!("clipboard write failed: {err}");
        }
    }
}
