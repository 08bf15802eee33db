//! Shared test utilities for relay-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion and
//! a fixed-advance [`MonoMeasure`] for hit-testing arithmetic.

use crate::text_field::TextMeasure;
use relay_types::backend::{Color, SdiBackend};
use relay_types::bitmap_font;
use relay_types::error::Result;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DrawCall {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
    SetClip {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    },
    ResetClip,
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Return text draw calls as `(text, x, y, font_size)` tuples,
    /// sorted by Y then X position for easy geometric analysis.
    pub fn text_positions(&self) -> Vec<(&str, i32, i32, u16)> {
        let mut positions: Vec<_> = self
            .calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::DrawText {
                    text,
                    x,
                    y,
                    font_size,
                    ..
                } = c
                {
                    Some((text.as_str(), *x, *y, *font_size))
                } else {
                    None
                }
            })
            .collect();
        positions.sort_by(|a, b| a.2.cmp(&b.2).then(a.1.cmp(&b.1)));
        positions
    }

    /// Color of the first text draw call containing `needle`.
    pub fn text_color(&self, needle: &str) -> Option<Color> {
        self.calls.iter().find_map(|c| match c {
            DrawCall::DrawText { text, color, .. } if text.contains(needle) => Some(*color),
            _ => None,
        })
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::DrawText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }

    /// Whether any `FillRect` used exactly this color.
    pub fn has_fill_color(&self, color: Color) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, DrawCall::FillRect { color: fc, .. } if *fc == color))
    }

    /// `FillRect` calls with the given color, as `(x, y, w, h)`.
    pub fn fills_with(&self, color: Color) -> Vec<(i32, i32, u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect {
                    x,
                    y,
                    w,
                    h,
                    color: fc,
                } if *fc == color => Some((*x, *y, *w, *h)),
                _ => None,
            })
            .collect()
    }
}

impl SdiBackend for MockBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, _color: Color) -> Result<()> {
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.calls.push(DrawCall::SetClip { x, y, w, h });
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        self.calls.push(DrawCall::ResetClip);
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        text.chars().count() as u32 * bitmap_font::GLYPH_WIDTH * bitmap_font::scale_for(font_size)
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Every character advances by the same number of pixels.
pub struct MonoMeasure(pub u32);

impl TextMeasure for MonoMeasure {
    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.0
    }
}
