//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to these enums. Widgets and the
//! application never see raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute position.
    PointerMove { x: i32, y: i32 },
    /// Pointer button pressed at absolute position.
    PointerPress {
        x: i32,
        y: i32,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Pointer button released.
    PointerRelease { x: i32, y: i32 },
    /// An editing, navigation, or shortcut key went down.
    KeyDown { key: Key, modifiers: Modifiers },
    /// Character typed (already composed by the platform keyboard layout).
    TextInput(char),
    /// The window gained focus.
    FocusGained,
    /// The window lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Keys understood by the widget toolkit.
///
/// Printable text arrives as `Char`. Shortcut letters (`ctrl+a` and friends)
/// are lowercase `Char` values with `Modifiers::ctrl_or_cmd` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Escape,
    Tab,
}

/// Modifier keys held while an event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    /// Control on Linux/Windows, Command on macOS.
    pub ctrl_or_cmd: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl_or_cmd: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl_or_cmd: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl_or_cmd: true,
    };
}
