//! Clipboard capability.
//!
//! The OS clipboard is a shared external resource that may be missing or
//! locked. Every call is synchronous and fallible; callers decide how to
//! degrade. Nothing here retries.

use crate::error::ClipboardUnavailable;

/// Read/write access to a text clipboard.
pub trait Clipboard {
    /// Current clipboard text.
    fn read(&mut self) -> Result<String, ClipboardUnavailable>;

    /// Replace the clipboard contents with `text`.
    fn write(&mut self, text: &str) -> Result<(), ClipboardUnavailable>;
}

/// In-process clipboard.
///
/// Used when the system clipboard is disabled in config, and by tests. It
/// can be switched into a failing state to simulate a missing OS clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: String,
    unavailable: bool,
}

impl MemoryClipboard {
    /// Create an empty, working clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a working clipboard holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: text.into(),
            unavailable: false,
        }
    }

    /// Create a clipboard on which every read and write fails.
    pub fn unavailable() -> Self {
        Self {
            contents: String::new(),
            unavailable: true,
        }
    }

    /// Make subsequent calls fail (`true`) or succeed (`false`).
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Stored text, regardless of availability.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Result<String, ClipboardUnavailable> {
        if self.unavailable {
            return Err(ClipboardUnavailable("memory clipboard disabled".into()));
        }
        Ok(self.contents.clone())
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardUnavailable> {
        if self.unavailable {
            return Err(ClipboardUnavailable("memory clipboard disabled".into()));
        }
        self.contents.clear();
        self.contents.push_str(text);
        Ok(())
    }
}
