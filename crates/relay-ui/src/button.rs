//! Button widget.

use crate::context::DrawContext;
use crate::layout::{self, Padding, Rect};
use crate::theme::Theme;
use crate::widget::Widget;
use relay_types::backend::Color;
use relay_types::error::Result;

/// Button visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Default state.
    Normal,
    /// Pointer is over the button.
    Hover,
    /// Button is being pressed.
    Pressed,
    /// Button is disabled and non-interactive.
    Disabled,
}

/// Button visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled button with accent color.
    Primary,
    /// Filled button with neutral color.
    Secondary,
    /// Button with border only, no fill.
    Outline,
    /// Button with no background or border until hovered.
    Ghost,
}

/// A clickable button with a text label.
///
/// Pointer handlers track hover and press against `bounds`; the visual
/// state is derived from those flags.
#[derive(Debug, Clone)]
pub struct Button {
    /// Button text label.
    pub label: String,
    /// Visual style variant.
    pub style: ButtonStyle,
    /// Internal padding around label.
    pub padding: Padding,
    /// Disabled buttons ignore the pointer.
    pub disabled: bool,
    bounds: Rect,
    hovered: bool,
    pressed: bool,
}

impl Button {
    /// Create a new secondary button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::Secondary,
            padding: Padding::symmetric(8, 4),
            disabled: false,
            bounds: Rect::default(),
            hovered: false,
            pressed: false,
        }
    }

    /// Create a new primary (accent-colored) button.
    pub fn primary(label: impl Into<String>) -> Self {
        Self {
            style: ButtonStyle::Primary,
            ..Self::new(label)
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Current visual state. A press dragged off the button shows as
    /// `Normal` until the pointer returns.
    pub fn state(&self) -> ButtonState {
        if self.disabled {
            ButtonState::Disabled
        } else if self.pressed && self.hovered {
            ButtonState::Pressed
        } else if self.hovered {
            ButtonState::Hover
        } else {
            ButtonState::Normal
        }
    }

    pub fn handle_pointer_move(&mut self, x: i32, y: i32) {
        if !self.disabled {
            self.hovered = self.bounds.contains(x, y);
        }
    }

    /// Left-button press. Only a hovered button becomes pressed.
    pub fn handle_pointer_press(&mut self, x: i32, y: i32) {
        if self.disabled {
            return;
        }
        self.hovered = self.bounds.contains(x, y);
        self.pressed = self.hovered;
    }

    /// Returns `true` when a press that started on the button also ends on it.
    pub fn handle_pointer_release(&mut self, x: i32, y: i32) -> bool {
        if self.disabled {
            return false;
        }
        self.hovered = self.bounds.contains(x, y);
        let clicked = self.pressed && self.hovered;
        self.pressed = false;
        clicked
    }

    fn bg_color(&self, theme: &Theme) -> Option<Color> {
        let state = self.state();
        match self.style {
            ButtonStyle::Primary => Some(match state {
                ButtonState::Pressed => theme.accent_pressed,
                ButtonState::Hover => theme.accent_hover,
                ButtonState::Disabled => theme.button_bg_disabled,
                _ => theme.accent,
            }),
            ButtonStyle::Secondary => Some(match state {
                ButtonState::Pressed => theme.button_bg_pressed,
                ButtonState::Hover => theme.button_bg_hover,
                ButtonState::Disabled => theme.button_bg_disabled,
                _ => theme.button_bg,
            }),
            ButtonStyle::Outline | ButtonStyle::Ghost => match state {
                ButtonState::Hover => Some(theme.accent_subtle),
                ButtonState::Pressed => Some(theme.button_bg_pressed),
                _ => None,
            },
        }
    }

    fn text_color(&self, theme: &Theme) -> Color {
        if self.disabled {
            return theme.text_disabled;
        }
        match self.style {
            ButtonStyle::Primary => theme.text_on_accent,
            _ => theme.text_primary,
        }
    }
}

impl Widget for Button {
    fn measure(&self, ctx: &DrawContext<'_>, _available_w: u32, _available_h: u32) -> (u32, u32) {
        let text_w = ctx.measure_text(&self.label);
        let text_h = ctx.backend.measure_text_height(ctx.theme.font_size_md);
        (
            text_w + self.padding.horizontal(),
            text_h + self.padding.vertical(),
        )
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let radius = ctx.theme.border_radius_md;

        // Background.
        if let Some(bg) = self.bg_color(ctx.theme) {
            ctx.backend.fill_rounded_rect(x, y, w, h, radius, bg)?;
        }

        if self.style == ButtonStyle::Outline {
            let bc = if self.disabled {
                ctx.theme.border_subtle
            } else {
                ctx.theme.border
            };
            ctx.backend.stroke_rounded_rect(x, y, w, h, radius, 1, bc)?;
        }

        // Label.
        let fs = ctx.theme.font_size_md;
        let text_w = ctx.measure_text(&self.label);
        let text_h = ctx.backend.measure_text_height(fs);
        let tx = x + layout::center(w, text_w);
        let ty = y + layout::center(h, text_h);
        let color = self.text_color(ctx.theme);
        ctx.label_styled(&self.label, tx, ty, fs, color)
    }
}
