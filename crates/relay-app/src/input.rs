//! Input dispatch: routes platform-agnostic events to the widgets and runs
//! the submit action.

use log::{debug, info, warn};

use relay_types::clipboard::Clipboard;
use relay_types::input::{InputEvent, Key, Modifiers, PointerButton};
use relay_ui::TextMeasure;

use crate::app_state::AppState;
use crate::command;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Handle one event. `measure` must match how the field is drawn.
pub fn handle_event(
    event: &InputEvent,
    state: &mut AppState,
    measure: &dyn TextMeasure,
    clipboard: &mut dyn Clipboard,
) -> InputResult {
    match *event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::PointerMove { x, y } => {
            state.submit_button.handle_pointer_move(x, y);
            state.field.handle_pointer_drag(x, y, measure);
        },
        InputEvent::PointerPress {
            x,
            y,
            button: PointerButton::Left,
            modifiers,
        } => {
            state
                .field
                .handle_pointer_press(x, y, modifiers.shift, measure);
            state.submit_button.handle_pointer_press(x, y);
        },
        InputEvent::PointerPress { .. } => {},
        InputEvent::PointerRelease { x, y } => {
            state.field.handle_pointer_release();
            if state.submit_button.handle_pointer_release(x, y) {
                submit(state);
            }
        },
        InputEvent::KeyDown { key, modifiers } => {
            if state.field.handle_key(key, modifiers, clipboard) {
                submit(state);
            }
        },
        InputEvent::TextInput(ch) => {
            state
                .field
                .handle_key(Key::Char(ch), Modifiers::NONE, clipboard);
        },
        InputEvent::FocusGained | InputEvent::FocusLost => {
            debug!("window focus changed: {event:?}");
        },
    }
    InputResult::Continue
}

/// Log the field text; parse and clear it unless it is blank.
pub fn submit(state: &mut AppState) {
    let text = state.field.text().to_string();
    info!("Submitted: {text:?}");
    if text.trim().is_empty() {
        return;
    }
    let cmd = command::parse(&text);
    match serde_json::to_string(&cmd) {
        Ok(json) => info!("Parsed command: {json}"),
        Err(e) => warn!("could not serialize command: {e}"),
    }
    state.last_command = Some(cmd);
    state.field.clear();
}
