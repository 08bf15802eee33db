//! Theme-aware drawing context.
//!
//! All relay-ui widgets render through `DrawContext`, which wraps a
//! `&mut dyn SdiBackend` and provides access to the active theme.

use crate::theme::Theme;
use relay_types::backend::{Color, SdiBackend};
use relay_types::error::Result;

/// Drawing context wrapping a backend and theme.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn SdiBackend,
    pub theme: &'a Theme,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn SdiBackend, theme: &'a Theme) -> Self {
        Self { backend, theme }
    }

    /// Draw a themed label with a specific style.
    pub fn label_styled(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.backend.draw_text(text, x, y, font_size, color)
    }

    /// Measure text width using theme default font size.
    pub fn measure_text(&self, text: &str) -> u32 {
        self.backend.measure_text(text, self.theme.font_size_md)
    }
}
