//! Backend trait definitions.
//!
//! Every platform implements these traits. Widgets and the application loop
//! dispatch all rendering and input through trait boundaries -- they never
//! call platform-specific APIs.
//!
//! The `SdiBackend` trait provides core rendering methods (required) and a
//! few extended primitives with default implementations built on
//! `fill_rect`, so a minimal backend only has to fill rectangles and draw
//! text.

use crate::error::Result;
use crate::input::InputEvent;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Rendering backend trait.
///
/// # Core Methods (required)
///
/// `init`, `clear`, `fill_rect`, `draw_text`, `swap_buffers`,
/// `set_clip_rect`, `reset_clip_rect`, `measure_text`, and `shutdown`.
///
/// # Extended Primitives (optional, with defaults)
///
/// Backends may override the extended methods for native rendering. Default
/// implementations approximate using `fill_rect`.
#[allow(clippy::too_many_arguments)]
pub trait SdiBackend {
    // -----------------------------------------------------------------------
    // Core methods (required -- no default implementations)
    // -----------------------------------------------------------------------

    /// Initialize the rendering subsystem.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Clear the screen to a solid color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw text at the given position. The backend chooses its available font.
    /// `font_size` is a hint in pixels; backends may approximate.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Present the back buffer.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Restrict subsequent drawing to the given rectangle.
    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Remove the clip rectangle.
    fn reset_clip_rect(&mut self) -> Result<()>;

    /// Width in pixels of `text` rendered at `font_size`.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Release backend resources.
    fn shutdown(&mut self) -> Result<()>;

    // -----------------------------------------------------------------------
    // Extended: Shape Primitives
    // -----------------------------------------------------------------------

    /// Draw a filled rectangle with rounded corners.
    ///
    /// `radius` specifies the corner radius in pixels. If `radius` exceeds
    /// half the smaller dimension, it is clamped. A radius of 0 is equivalent
    /// to `fill_rect`.
    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _radius: u16,
        color: Color,
    ) -> Result<()> {
        self.fill_rect(x, y, w, h, color)
    }

    /// Draw the outline of a rectangle.
    ///
    /// `stroke_width` is drawn inward from the given bounds.
    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        let sw = stroke_width as u32;
        self.fill_rect(x, y, w, sw, color)?;
        self.fill_rect(x, y + h as i32 - sw as i32, w, sw, color)?;
        self.fill_rect(x, y + sw as i32, sw, h.saturating_sub(sw * 2), color)?;
        self.fill_rect(
            x + w as i32 - sw as i32,
            y + sw as i32,
            sw,
            h.saturating_sub(sw * 2),
            color,
        )?;
        Ok(())
    }

    /// Draw the outline of a rounded rectangle.
    fn stroke_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _radius: u16,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.stroke_rect(x, y, w, h, stroke_width, color)
    }

    // -----------------------------------------------------------------------
    // Extended: Text
    // -----------------------------------------------------------------------

    /// Measure the height of text at the given font size.
    fn measure_text_height(&self, font_size: u16) -> u32 {
        (font_size as f32 * 1.2) as u32
    }
}

/// Input backend trait.
///
/// Maps platform-specific input to the platform-agnostic `InputEvent` enum.
pub trait InputBackend {
    /// Poll for pending input events.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
