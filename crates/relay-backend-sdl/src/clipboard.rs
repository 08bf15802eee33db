//! System clipboard through SDL2.

use sdl2::clipboard::ClipboardUtil;

use relay_types::clipboard::Clipboard;
use relay_types::error::ClipboardUnavailable;

/// OS clipboard. Holds its own handle to the video subsystem, so it can
/// outlive borrows of the backend.
pub struct SdlClipboard {
    util: ClipboardUtil,
}

impl SdlClipboard {
    pub(crate) fn new(util: ClipboardUtil) -> Self {
        Self { util }
    }
}

impl Clipboard for SdlClipboard {
    fn read(&mut self) -> Result<String, ClipboardUnavailable> {
        self.util.clipboard_text().map_err(ClipboardUnavailable)
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardUnavailable> {
        self.util
            .set_clipboard_text(text)
            .map_err(ClipboardUnavailable)
    }
}
