//! Application state.

use relay_types::config::RelayConfig;
use relay_ui::{Button, Rect, TextField, Theme};

use crate::command::ParsedCommand;

const FIELD_W: u32 = 400;
const FIELD_H: u32 = 40;
const BUTTON_W: u32 = 120;
const BUTTON_H: u32 = 40;

/// Field and button rectangles for a window of the given size.
///
/// Both are centered horizontally. The field sits 40px above the vertical
/// middle and the button 20px below it.
pub fn layout(screen_w: u32, screen_h: u32) -> (Rect, Rect) {
    let mid_y = (screen_h / 2) as i32;
    let field = Rect::new(
        relay_ui::layout::center(screen_w, FIELD_W),
        mid_y - 40,
        FIELD_W,
        FIELD_H,
    );
    let button = Rect::new(
        relay_ui::layout::center(screen_w, BUTTON_W),
        mid_y + 20,
        BUTTON_W,
        BUTTON_H,
    );
    (field, button)
}

/// Everything the main loop owns between frames.
pub struct AppState {
    pub config: RelayConfig,
    pub theme: Theme,
    pub field: TextField,
    pub submit_button: Button,
    /// Latest non-blank submit, summarised under the button.
    pub last_command: Option<ParsedCommand>,
}

impl AppState {
    pub fn new(config: RelayConfig, theme: Theme) -> Self {
        let (field_rect, button_rect) = layout(config.screen_width, config.screen_height);
        let mut field =
            TextField::from_config(&config.text_field).with_placeholder(config.placeholder.clone());
        field.set_bounds(field_rect);
        let mut submit_button = Button::primary("Submit");
        submit_button.set_bounds(button_rect);
        Self {
            config,
            theme,
            field,
            submit_button,
            last_command: None,
        }
    }
}
