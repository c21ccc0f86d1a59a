use arboard::Clipboard;

use crate::error::DispatchError;

/// Anything text can be copied to.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), DispatchError>;
}

/// The OS clipboard. One handle is held for the whole run.
///
/// On Linux, clipboard contents are served by this process and may vanish once
/// it exits unless a clipboard manager takes them over.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, DispatchError> {
        Ok(Self {
            inner: Clipboard::new()?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), DispatchError> {
        self.inner.set_text(text)?;
        Ok(())
    }
}
