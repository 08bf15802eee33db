//! TextField widget: single-line editable text with cursor, selection and
//! clipboard shortcuts.
//!
//! All offsets are character offsets, not byte offsets. The field keeps
//! these invariants after every call:
//!
//! - `cursor <= len(text) <= max_length`
//! - an anchor, when present, is `<= len(text)`
//!
//! A selection exists only while the anchor differs from the cursor. An
//! anchor equal to the cursor is left behind by a press that has not moved
//! yet and is treated as "no selection" everywhere.

use log::{debug, warn};

use crate::context::DrawContext;
use crate::layout::{self, Rect};
use crate::widget::Widget;
use relay_types::backend::SdiBackend;
use relay_types::clipboard::Clipboard;
use relay_types::config::{DEFAULT_BLINK_INTERVAL_SECS, DEFAULT_MAX_LENGTH, TextFieldConfig};
use relay_types::error::Result;
use relay_types::input::{Key, Modifiers};

/// Gap in pixels between the field edge and its text.
pub const TEXT_PADDING: i32 = 5;

/// Cursor bar width in pixels.
const CURSOR_WIDTH: u32 = 2;

/// Pixel width of a text run, as rendered by whoever draws the field.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> u32;
}

/// Measures text through a backend at a fixed font size.
pub struct FontMetrics<'a> {
    backend: &'a dyn SdiBackend,
    font_size: u16,
}

impl<'a> FontMetrics<'a> {
    pub fn new(backend: &'a dyn SdiBackend, font_size: u16) -> Self {
        Self { backend, font_size }
    }
}

impl TextMeasure for FontMetrics<'_> {
    fn text_width(&self, text: &str) -> u32 {
        self.backend.measure_text(text, self.font_size)
    }
}

impl TextMeasure for DrawContext<'_> {
    fn text_width(&self, text: &str) -> u32 {
        self.measure_text(text)
    }
}

/// Editable single-line text field.
#[derive(Debug, Clone)]
pub struct TextField {
    text: String,
    cursor: usize,
    anchor: Option<usize>,
    focused: bool,
    dragging: bool,
    max_length: usize,
    placeholder: String,
    bounds: Rect,
    cursor_visible: bool,
    last_toggle: f64,
    blink_interval: f64,
    /// Time passed to the latest `tick`.
    clock: f64,
    /// Bumped on every content change.
    revision: u64,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl TextField {
    /// Create an empty, unfocused field holding at most `max_length`
    /// characters.
    pub fn new(max_length: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            anchor: None,
            focused: false,
            dragging: false,
            max_length,
            placeholder: String::new(),
            bounds: Rect::default(),
            cursor_visible: true,
            last_toggle: 0.0,
            blink_interval: DEFAULT_BLINK_INTERVAL_SECS,
            clock: 0.0,
            revision: 0,
        }
    }

    /// Create a field from the `[text_field]` config table.
    pub fn from_config(config: &TextFieldConfig) -> Self {
        Self::new(config.max_length).with_blink_interval(config.blink_interval_secs)
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_blink_interval(mut self, secs: f64) -> Self {
        self.blink_interval = secs;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the blinking cursor is in its visible phase.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the hit-test rectangle used by the pointer handlers.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Number of characters in the field.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Selected range as `(lo, hi)` with `lo < hi`, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        match self.anchor {
            Some(anchor) if anchor != self.cursor => {
                Some((anchor.min(self.cursor), anchor.max(self.cursor)))
            },
            _ => None,
        }
    }

    /// The selected substring, if a selection exists.
    pub fn selected_text(&self) -> Option<&str> {
        self.selection()
            .map(|(lo, hi)| &self.text[self.byte_index(lo)..self.byte_index(hi)])
    }

    /// Empty the field. Focus is kept.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.anchor = None;
        self.dragging = false;
        self.revision += 1;
        self.restart_blink();
    }

    // -- Pointer --------------------------------------------------------

    /// Focus follows the press. Inside the bounds the cursor jumps to the
    /// pressed character boundary and a drag begins.
    pub fn handle_pointer_press(&mut self, x: i32, y: i32, shift: bool, measure: &dyn TextMeasure) {
        self.focused = self.bounds.contains(x, y);
        if !self.focused {
            self.anchor = None;
            self.dragging = false;
            return;
        }
        self.cursor = self.offset_at(x, measure);
        if !(shift && self.anchor.is_some()) {
            self.anchor = Some(self.cursor);
        }
        self.dragging = true;
        debug!("text field press at {x},{y}: cursor {}", self.cursor);
    }

    /// Move the cursor while a press is held. The anchor stays put.
    pub fn handle_pointer_drag(&mut self, x: i32, y: i32, measure: &dyn TextMeasure) {
        if self.dragging && self.focused && self.bounds.contains(x, y) {
            self.cursor = self.offset_at(x, measure);
        }
    }

    /// End a drag. A press that never moved leaves no selection.
    pub fn handle_pointer_release(&mut self) {
        self.dragging = false;
        if self.anchor == Some(self.cursor) {
            self.anchor = None;
        }
    }

    /// Character boundary for a window x coordinate.
    ///
    /// Scans prefixes until one reaches `x`, then steps back one boundary,
    /// so a point inside a glyph lands before it.
    ///
    /// Measured from the unscrolled text origin: the left shift `draw`
    /// applies to overflowing text is not taken into account.
    pub fn offset_at(&self, x: i32, measure: &dyn TextMeasure) -> usize {
        let rel = x as i64 - (self.bounds.x as i64 + TEXT_PADDING as i64);
        if rel <= 0 {
            return 0;
        }
        let len = self.len();
        if rel >= measure.text_width(&self.text) as i64 {
            return len;
        }
        let boundaries = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()));
        for (offset, byte) in boundaries.enumerate() {
            if measure.text_width(&self.text[..byte]) as i64 >= rel {
                return offset.saturating_sub(1);
            }
        }
        len
    }

    // -- Keyboard -------------------------------------------------------

    /// Apply one key press. Returns `true` when the user asked to submit.
    ///
    /// Ignored while unfocused. Clipboard failures are logged and never
    /// surface here.
    pub fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        clipboard: &mut dyn Clipboard,
    ) -> bool {
        if !self.focused {
            return false;
        }
        let before = (self.cursor, self.anchor, self.revision);
        let mut submit = false;

        match key {
            Key::Char(ch) if modifiers.ctrl_or_cmd => match ch.to_ascii_lowercase() {
                'a' => self.select_all(),
                'c' => self.copy(clipboard),
                'x' => self.cut(clipboard),
                'v' => self.paste(clipboard),
                _ => {},
            },
            Key::Backspace => {
                if !self.delete_selection() && self.cursor > 0 {
                    self.remove_char(self.cursor - 1);
                    self.cursor -= 1;
                }
            },
            Key::Delete => {
                if !self.delete_selection() && self.cursor < self.len() {
                    self.remove_char(self.cursor);
                }
            },
            Key::Left => match (modifiers.shift, self.selection()) {
                (true, _) => {
                    self.start_selection();
                    self.cursor = self.cursor.saturating_sub(1);
                },
                (false, Some((lo, _))) => {
                    self.cursor = lo;
                    self.anchor = None;
                },
                (false, None) => {
                    self.cursor = self.cursor.saturating_sub(1);
                    self.anchor = None;
                },
            },
            Key::Right => match (modifiers.shift, self.selection()) {
                (true, _) => {
                    self.start_selection();
                    self.cursor = (self.cursor + 1).min(self.len());
                },
                (false, Some((_, hi))) => {
                    self.cursor = hi;
                    self.anchor = None;
                },
                (false, None) => {
                    self.cursor = (self.cursor + 1).min(self.len());
                    self.anchor = None;
                },
            },
            Key::Home => self.move_to(0, modifiers.shift),
            Key::End => self.move_to(self.len(), modifiers.shift),
            Key::Enter => submit = true,
            Key::Char(ch) if !ch.is_control() => {
                self.delete_selection();
                if self.len() < self.max_length {
                    self.insert_str(&ch.to_string());
                }
            },
            Key::Char(_) | Key::Escape | Key::Tab => {},
        }

        if (self.cursor, self.anchor, self.revision) != before {
            self.restart_blink();
        }
        submit
    }

    /// Advance the blink clock to `now` (seconds).
    pub fn tick(&mut self, now: f64) {
        self.clock = now;
        if now - self.last_toggle > self.blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_toggle = now;
        }
    }

    fn restart_blink(&mut self) {
        self.cursor_visible = true;
        self.last_toggle = self.clock;
    }

    /// Anchor at the cursor unless an anchor is already set.
    fn start_selection(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
    }

    fn move_to(&mut self, offset: usize, extend: bool) {
        if extend {
            self.start_selection();
        } else {
            self.anchor = None;
        }
        self.cursor = offset;
    }

    fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.len();
    }

    fn copy(&mut self, clipboard: &mut dyn Clipboard) {
        if let Some(selected) = self.selected_text() {
            if let Err(e) = clipboard.write(selected) {
                warn!("copy failed: {e}");
            }
        }
    }

    fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(selected) = self.selected_text() else {
            return;
        };
        if let Err(e) = clipboard.write(selected) {
            warn!("cut: text removed but not copied: {e}");
        }
        self.delete_selection();
    }

    fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        let pasted = match clipboard.read() {
            Ok(text) => text,
            Err(e) => {
                warn!("paste failed: {e}");
                return;
            },
        };
        self.delete_selection();
        let room = self.max_length.saturating_sub(self.len());
        let (insert, truncated) = printable_prefix(&pasted, room);
        if truncated {
            debug!("paste truncated to {room} chars");
        }
        self.insert_str(&insert);
    }

    /// Remove the selected range and park the cursor at its start. Any
    /// anchor is cleared, including one equal to the cursor. Returns whether
    /// text was removed.
    fn delete_selection(&mut self) -> bool {
        let Some((lo, hi)) = self.selection() else {
            self.anchor = None;
            return false;
        };
        let start = self.byte_index(lo);
        let end = self.byte_index(hi);
        self.text.drain(start..end);
        self.cursor = lo;
        self.anchor = None;
        self.revision += 1;
        true
    }

    fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
        self.revision += 1;
    }

    fn remove_char(&mut self, offset: usize) {
        let at = self.byte_index(offset);
        self.text.remove(at);
        self.revision += 1;
    }

    /// Window x of the boundary before `offset`, for text drawn at `origin`.
    fn boundary_x(&self, origin: i32, offset: usize, measure: &dyn TextMeasure) -> i32 {
        origin + measure.text_width(&self.text[..self.byte_index(offset)]) as i32
    }

    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Pasted text without control characters, cut to `room` chars. The flag
/// is set only when printable characters were dropped.
fn printable_prefix(pasted: &str, room: usize) -> (String, bool) {
    let mut printable = pasted.chars().filter(|c| !c.is_control());
    let kept: String = printable.by_ref().take(room).collect();
    (kept, printable.next().is_some())
}

impl Widget for TextField {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let h = ctx.backend.measure_text_height(ctx.theme.font_size_md) + 2 * TEXT_PADDING as u32;
        (available_w, h)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let theme = ctx.theme;
        let radius = theme.border_radius_md;
        let pad = TEXT_PADDING as u32;

        ctx.backend
            .fill_rounded_rect(x, y, w, h, radius, theme.input_bg)?;
        let bc = if self.focused {
            theme.input_border_focus
        } else {
            theme.input_border
        };
        ctx.backend.stroke_rounded_rect(x, y, w, h, radius, 1, bc)?;

        let fs = theme.font_size_md;
        let text_h = ctx.backend.measure_text_height(fs);
        let inner_w = w.saturating_sub(2 * pad);
        // Keep the end of long text in view.
        let scroll = ctx.measure_text(&self.text).saturating_sub(inner_w) as i32;
        let tx = x + TEXT_PADDING - scroll;
        let ty = y + layout::center(h, text_h);

        ctx.backend
            .set_clip_rect(x + TEXT_PADDING, y + 1, inner_w, h.saturating_sub(2))?;

        if self.text.is_empty() {
            if !self.placeholder.is_empty() {
                ctx.label_styled(&self.placeholder, tx, ty, fs, theme.text_disabled)?;
            }
        } else {
            if let Some((lo, hi)) = self.selection() {
                let sx = self.boundary_x(tx, lo, &*ctx);
                let ex = self.boundary_x(tx, hi, &*ctx);
                ctx.backend
                    .fill_rect(sx, ty, (ex - sx) as u32, text_h, theme.selection_bg)?;
            }
            ctx.label_styled(&self.text, tx, ty, fs, theme.text_primary)?;
        }

        if self.focused && self.cursor_visible {
            let cx = self.boundary_x(tx, self.cursor, &*ctx);
            ctx.backend.fill_rect(
                cx,
                y + TEXT_PADDING,
                CURSOR_WIDTH,
                h.saturating_sub(2 * pad),
                theme.text_primary,
            )?;
        }

        ctx.backend.reset_clip_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{DrawCall, MockBackend, MonoMeasure};
    use crate::theme::Theme;
    use relay_types::clipboard::MemoryClipboard;

    const BOUNDS: Rect = Rect::new(0, 0, 200, 40);

    /// 10px per character, so offset `n` ends at `TEXT_PADDING + 10 * n`.
    const MONO: MonoMeasure = MonoMeasure(10);

    fn focused(max_length: usize) -> TextField {
        let mut f = TextField::new(max_length);
        f.set_bounds(BOUNDS);
        f.handle_pointer_press(100, 20, false, &MONO);
        f.handle_pointer_release();
        f
    }

    fn type_str(f: &mut TextField, s: &str, clip: &mut MemoryClipboard) {
        for ch in s.chars() {
            f.handle_key(Key::Char(ch), Modifiers::NONE, clip);
        }
    }

    /// Field holding `text` with anchor at `anchor` and cursor at `cursor`.
    fn with_selection(text: &str, anchor: usize, cursor: usize) -> TextField {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(100);
        type_str(&mut f, text, &mut clip);
        f.handle_key(Key::Home, Modifiers::NONE, &mut clip);
        for _ in 0..anchor {
            f.handle_key(Key::Right, Modifiers::NONE, &mut clip);
        }
        for _ in anchor..cursor {
            f.handle_key(Key::Right, Modifiers::SHIFT, &mut clip);
        }
        for _ in cursor..anchor {
            f.handle_key(Key::Left, Modifiers::SHIFT, &mut clip);
        }
        assert_eq!((f.anchor(), f.cursor()), (Some(anchor), cursor));
        f
    }

    fn press(f: &mut TextField, key: Key, mods: Modifiers, clip: &mut MemoryClipboard) -> bool {
        f.handle_key(key, mods, clip)
    }

    fn ctrl(f: &mut TextField, ch: char, clip: &mut MemoryClipboard) {
        f.handle_key(Key::Char(ch), Modifiers::CTRL, clip);
    }

    #[test]
    fn new_defaults() {
        let f = TextField::new(10);
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
        assert_eq!(f.anchor(), None);
        assert!(!f.is_focused());
        assert!(!f.is_dragging());
        assert!(f.cursor_visible());
        assert_eq!(f.max_length(), 10);
    }

    #[test]
    fn from_config_uses_limits() {
        let cfg = TextFieldConfig {
            max_length: 3,
            ..TextFieldConfig::default()
        };
        let mut f = TextField::from_config(&cfg).with_placeholder("hint");
        assert_eq!(f.max_length(), 3);
        assert_eq!(f.placeholder(), "hint");
        f.set_placeholder("other");
        assert_eq!(f.placeholder(), "other");
    }

    #[test]
    fn keys_ignored_while_unfocused() {
        let mut clip = MemoryClipboard::new();
        let mut f = TextField::new(10);
        assert!(!press(&mut f, Key::Char('a'), Modifiers::NONE, &mut clip));
        assert!(!press(&mut f, Key::Enter, Modifiers::NONE, &mut clip));
        assert!(f.is_empty());
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hllo", &mut clip);
        press(&mut f, Key::Home, Modifiers::NONE, &mut clip);
        press(&mut f, Key::Right, Modifiers::NONE, &mut clip);
        type_str(&mut f, "e", &mut clip);
        assert_eq!(f.text(), "hello");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn typing_at_max_length_is_ignored() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(3);
        type_str(&mut f, "abc", &mut clip);
        type_str(&mut f, "d", &mut clip);
        assert_eq!(f.text(), "abc");
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn control_chars_are_not_inserted() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        press(&mut f, Key::Char('\u{7}'), Modifiers::NONE, &mut clip);
        assert!(f.is_empty());
    }

    #[test]
    fn multibyte_text_uses_char_offsets() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "héllo", &mut clip);
        press(&mut f, Key::Left, Modifiers::NONE, &mut clip);
        press(&mut f, Key::Left, Modifiers::NONE, &mut clip);
        press(&mut f, Key::Left, Modifiers::NONE, &mut clip);
        press(&mut f, Key::Backspace, Modifiers::NONE, &mut clip);
        assert_eq!(f.text(), "hllo");
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn backspace_deletes_selection() {
        let mut clip = MemoryClipboard::new();
        let mut f = with_selection("hello", 1, 4);
        press(&mut f, Key::Backspace, Modifiers::NONE, &mut clip);
        assert_eq!(f.text(), "ho");
        assert_eq!(f.cursor(), 1);
        assert_eq!(f.selection(), None);
        assert_eq!(f.anchor(), None);
    }

    #[test]
    fn backspace_and_delete_single_chars() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "abc", &mut clip);
        press(&mut f, Key::Backspace, Modifiers::NONE, &mut clip);
        assert_eq!((f.text(), f.cursor()), ("ab", 2));
        press(&mut f, Key::Home, Modifiers::NONE, &mut clip);
        press(&mut f, Key::Delete, Modifiers::NONE, &mut clip);
        assert_eq!((f.text(), f.cursor()), ("b", 0));
        press(&mut f, Key::Backspace, Modifiers::NONE, &mut clip);
        assert_eq!((f.text(), f.cursor()), ("b", 0));
        press(&mut f, Key::End, Modifiers::NONE, &mut clip);
        press(&mut f, Key::Delete, Modifiers::NONE, &mut clip);
        assert_eq!((f.text(), f.cursor()), ("b", 1));
    }

    #[test]
    fn delete_removes_selection_backwards() {
        let mut clip = MemoryClipboard::new();
        let mut f = with_selection("hello", 4, 1);
        press(&mut f, Key::Delete, Modifiers::NONE, &mut clip);
        assert_eq!(f.text(), "ho");
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn typing_replaces_selection() {
        let mut clip = MemoryClipboard::new();
        let mut f = with_selection("hello", 1, 4);
        type_str(&mut f, "i", &mut clip);
        assert_eq!(f.text(), "hio");
        assert_eq!(f.cursor(), 2);
        assert_eq!(f.anchor(), None);
    }

    #[test]
    fn select_all_copy_then_cut() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "abc", &mut clip);
        ctrl(&mut f, 'a', &mut clip);
        assert_eq!((f.anchor(), f.cursor()), (Some(0), 3));
        ctrl(&mut f, 'c', &mut clip);
        assert_eq!(clip.contents(), "abc");
        assert_eq!(f.text(), "abc");
        ctrl(&mut f, 'x', &mut clip);
        assert_eq!(f.text(), "");
        assert_eq!(f.cursor(), 0);
        assert_eq!(clip.contents(), "abc");
    }

    #[test]
    fn uppercase_shortcut_letter_is_accepted() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "abc", &mut clip);
        ctrl(&mut f, 'A', &mut clip);
        assert_eq!(f.selection(), Some((0, 3)));
    }

    #[test]
    fn copy_without_selection_leaves_clipboard() {
        let mut clip = MemoryClipboard::with_text("keep");
        let mut f = focused(10);
        type_str(&mut f, "abc", &mut clip);
        ctrl(&mut f, 'c', &mut clip);
        ctrl(&mut f, 'x', &mut clip);
        assert_eq!(clip.contents(), "keep");
        assert_eq!(f.text(), "abc");
    }

    #[test]
    fn other_ctrl_letters_do_nothing() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "ab", &mut clip);
        ctrl(&mut f, 'z', &mut clip);
        assert_eq!(f.text(), "ab");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn cut_still_deletes_when_clipboard_fails() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "abc", &mut clip);
        ctrl(&mut f, 'a', &mut clip);
        clip.set_unavailable(true);
        ctrl(&mut f, 'x', &mut clip);
        assert_eq!(f.text(), "");
        assert_eq!(clip.contents(), "");
    }

    #[test]
    fn copy_failure_keeps_content_and_selection() {
        let mut clip = MemoryClipboard::with_text("old");
        let mut f = focused(10);
        type_str(&mut f, "abc", &mut clip);
        ctrl(&mut f, 'a', &mut clip);
        clip.set_unavailable(true);
        ctrl(&mut f, 'c', &mut clip);
        assert_eq!(f.text(), "abc");
        assert_eq!(f.selection(), Some((0, 3)));
        assert_eq!(clip.contents(), "old");
    }

    #[test]
    fn paste_truncates_to_remaining_room() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(3);
        type_str(&mut f, "ab", &mut clip);
        press(&mut f, Key::Left, Modifiers::NONE, &mut clip);
        clip.write("XY").unwrap();
        ctrl(&mut f, 'v', &mut clip);
        assert_eq!(f.text(), "aXb");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn paste_into_full_field_inserts_nothing() {
        let mut clip = MemoryClipboard::with_text("XY");
        let mut f = focused(2);
        type_str(&mut f, "ab", &mut clip);
        ctrl(&mut f, 'v', &mut clip);
        assert_eq!(f.text(), "ab");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn paste_replaces_selection() {
        let mut clip = MemoryClipboard::with_text("EL");
        let mut f = with_selection("hello", 1, 4);
        ctrl(&mut f, 'v', &mut clip);
        assert_eq!(f.text(), "hELo");
        assert_eq!(f.cursor(), 3);
        assert_eq!(f.anchor(), None);
    }

    #[test]
    fn paste_failure_changes_nothing() {
        let mut clip = MemoryClipboard::unavailable();
        let mut f = with_selection("hello", 1, 4);
        ctrl(&mut f, 'v', &mut clip);
        assert_eq!(f.text(), "hello");
        assert_eq!(f.selection(), Some((1, 4)));
    }

    #[test]
    fn paste_drops_control_chars() {
        let mut clip = MemoryClipboard::with_text("a\nb\tc");
        let mut f = focused(10);
        ctrl(&mut f, 'v', &mut clip);
        assert_eq!(f.text(), "abc");
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn printable_prefix_flags_only_real_truncation() {
        assert_eq!(printable_prefix("a\nb\tc", 3), ("abc".to_string(), false));
        assert_eq!(printable_prefix("abcd", 3), ("abc".to_string(), true));
        assert_eq!(printable_prefix("\n\n", 0), (String::new(), false));
        assert_eq!(printable_prefix("éé", 1), ("é".to_string(), true));
    }

    #[test]
    fn left_collapses_selection_without_moving() {
        let mut clip = MemoryClipboard::new();
        let mut f = with_selection("hello", 1, 4);
        press(&mut f, Key::Left, Modifiers::NONE, &mut clip);
        assert_eq!(f.cursor(), 1);
        assert_eq!(f.selection(), None);
        assert_eq!(f.anchor(), None);
    }

    #[test]
    fn right_collapses_to_upper_bound() {
        let mut clip = MemoryClipboard::new();
        let mut f = with_selection("hello", 4, 1);
        press(&mut f, Key::Right, Modifiers::NONE, &mut clip);
        assert_eq!(f.cursor(), 4);
        assert_eq!(f.anchor(), None);
    }

    #[test]
    fn arrows_clamp_at_ends() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "ab", &mut clip);
        press(&mut f, Key::Right, Modifiers::NONE, &mut clip);
        assert_eq!(f.cursor(), 2);
        press(&mut f, Key::Home, Modifiers::NONE, &mut clip);
        press(&mut f, Key::Left, Modifiers::NONE, &mut clip);
        assert_eq!(f.cursor(), 0);
        press(&mut f, Key::Left, Modifiers::SHIFT, &mut clip);
        assert_eq!(f.cursor(), 0);
        assert_eq!(f.selection(), None);
    }

    #[test]
    fn shift_arrows_extend_from_cursor() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hello", &mut clip);
        press(&mut f, Key::Left, Modifiers::SHIFT, &mut clip);
        press(&mut f, Key::Left, Modifiers::SHIFT, &mut clip);
        assert_eq!(f.anchor(), Some(5));
        assert_eq!(f.selection(), Some((3, 5)));
        assert_eq!(f.selected_text(), Some("lo"));
        press(&mut f, Key::Right, Modifiers::SHIFT, &mut clip);
        assert_eq!(f.selected_text(), Some("o"));
    }

    #[test]
    fn home_end_with_and_without_shift() {
        let mut clip = MemoryClipboard::new();
        let mut f = with_selection("hello", 1, 2);
        press(&mut f, Key::End, Modifiers::SHIFT, &mut clip);
        assert_eq!(f.selection(), Some((1, 5)));
        press(&mut f, Key::Home, Modifiers::SHIFT, &mut clip);
        assert_eq!(f.selection(), Some((0, 1)));
        press(&mut f, Key::End, Modifiers::NONE, &mut clip);
        assert_eq!(f.cursor(), 5);
        assert_eq!(f.anchor(), None);
    }

    #[test]
    fn enter_requests_submit_and_keeps_text() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "go", &mut clip);
        assert!(press(&mut f, Key::Enter, Modifiers::NONE, &mut clip));
        assert_eq!(f.text(), "go");
        assert!(!press(&mut f, Key::Escape, Modifiers::NONE, &mut clip));
        assert!(!press(&mut f, Key::Tab, Modifiers::NONE, &mut clip));
    }

    #[test]
    fn clear_resets_content() {
        let mut f = with_selection("hello", 1, 4);
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
        assert_eq!(f.anchor(), None);
        assert!(f.is_focused());
    }

    // -- Pointer --

    #[test]
    fn offset_at_pins_nearest_boundary_before_overshoot() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "ab", &mut clip);
        let pad = TEXT_PADDING;
        assert_eq!(f.offset_at(pad + 15, &MONO), 1);
        assert_eq!(f.offset_at(pad + 10, &MONO), 0);
        assert_eq!(f.offset_at(pad + 11, &MONO), 1);
        assert_eq!(f.offset_at(pad, &MONO), 0);
        assert_eq!(f.offset_at(-50, &MONO), 0);
        assert_eq!(f.offset_at(pad + 20, &MONO), 2);
        assert_eq!(f.offset_at(pad + 500, &MONO), 2);
    }

    #[test]
    fn offset_at_respects_bounds_origin() {
        let mut clip = MemoryClipboard::new();
        let mut f = TextField::new(10);
        f.set_bounds(Rect::new(100, 0, 200, 40));
        f.handle_pointer_press(150, 20, false, &MONO);
        type_str(&mut f, "abcd", &mut clip);
        assert_eq!(f.offset_at(100 + TEXT_PADDING + 25, &MONO), 2);
    }

    #[test]
    fn press_outside_unfocuses_and_clears_anchor() {
        let mut f = with_selection("hello", 1, 4);
        f.handle_pointer_press(500, 20, false, &MONO);
        assert!(!f.is_focused());
        assert_eq!(f.anchor(), None);
        assert!(!f.is_dragging());
        assert_eq!(f.text(), "hello");
    }

    #[test]
    fn click_without_drag_leaves_no_selection() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hello", &mut clip);
        f.handle_pointer_press(TEXT_PADDING + 21, 20, false, &MONO);
        assert!(f.is_dragging());
        assert_eq!(f.cursor(), 2);
        assert_eq!(f.anchor(), Some(2));
        assert_eq!(f.selection(), None);
        f.handle_pointer_release();
        assert!(!f.is_dragging());
        assert_eq!(f.anchor(), None);
    }

    #[test]
    fn drag_selects_from_press_point() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hello", &mut clip);
        f.handle_pointer_press(TEXT_PADDING + 11, 20, false, &MONO);
        f.handle_pointer_drag(TEXT_PADDING + 100, 20, &MONO);
        f.handle_pointer_release();
        assert_eq!(f.selection(), Some((1, 5)));
        assert_eq!(f.selected_text(), Some("ello"));
    }

    #[test]
    fn drag_outside_bounds_is_ignored() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hello", &mut clip);
        f.handle_pointer_press(TEXT_PADDING + 11, 20, false, &MONO);
        f.handle_pointer_drag(TEXT_PADDING + 40, 80, &MONO);
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hello", &mut clip);
        f.handle_pointer_drag(TEXT_PADDING + 11, 20, &MONO);
        assert_eq!(f.cursor(), 5);
    }

    #[test]
    fn shift_click_extends_existing_anchor() {
        let mut f = with_selection("hello", 1, 2);
        f.handle_pointer_press(TEXT_PADDING + 41, 20, true, &MONO);
        f.handle_pointer_release();
        assert_eq!(f.selection(), Some((1, 4)));
    }

    #[test]
    fn shift_click_without_anchor_starts_fresh() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hello", &mut clip);
        f.handle_pointer_press(TEXT_PADDING + 21, 20, true, &MONO);
        assert_eq!(f.anchor(), Some(2));
    }

    #[test]
    fn arrow_after_unmoved_press_does_not_select() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "hello", &mut clip);
        f.handle_pointer_press(TEXT_PADDING + 21, 20, false, &MONO);
        press(&mut f, Key::Right, Modifiers::NONE, &mut clip);
        assert_eq!(f.cursor(), 3);
        assert_eq!(f.selection(), None);
    }

    // -- Blink --

    #[test]
    fn tick_toggles_after_interval() {
        let mut f = TextField::new(10);
        f.tick(0.3);
        assert!(f.cursor_visible());
        f.tick(0.6);
        assert!(!f.cursor_visible());
        f.tick(1.2);
        assert!(f.cursor_visible());
    }

    #[test]
    fn tick_twice_within_interval_is_idempotent() {
        let mut f = TextField::new(10);
        f.tick(0.6);
        let phase = f.cursor_visible();
        f.tick(0.9);
        f.tick(1.05);
        assert_eq!(f.cursor_visible(), phase);
    }

    #[test]
    fn accepted_key_restarts_blink() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        f.tick(0.6);
        assert!(!f.cursor_visible());
        type_str(&mut f, "a", &mut clip);
        assert!(f.cursor_visible());
        f.tick(1.0);
        assert!(f.cursor_visible(), "timer restarts at the keypress");
        f.tick(1.2);
        assert!(!f.cursor_visible());
    }

    #[test]
    fn rejected_key_keeps_blink_phase() {
        let mut clip = MemoryClipboard::new();
        let mut f = focused(1);
        type_str(&mut f, "a", &mut clip);
        f.tick(0.6);
        type_str(&mut f, "b", &mut clip);
        assert!(!f.cursor_visible());
    }

    #[test]
    fn custom_blink_interval() {
        let mut f = TextField::new(10).with_blink_interval(1.0);
        f.tick(0.8);
        assert!(f.cursor_visible());
        f.tick(1.1);
        assert!(!f.cursor_visible());
    }

    // -- Draw / measure tests using MockBackend --

    fn draw_field(f: &TextField, theme: &Theme, w: u32) -> MockBackend {
        let mut backend = MockBackend::new();
        {
            let mut ctx = DrawContext::new(&mut backend, theme);
            f.draw(&mut ctx, 0, 0, w, 40).unwrap();
        }
        backend
    }

    #[test]
    fn measure_fills_width() {
        let theme = Theme::dark();
        let mut backend = MockBackend::new();
        let ctx = DrawContext::new(&mut backend, &theme);
        let (w, h) = TextField::new(10).measure(&ctx, 400, 100);
        assert_eq!(w, 400);
        assert!(h > theme.font_size_md as u32);
    }

    #[test]
    fn draw_shows_text() {
        let theme = Theme::dark();
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "Hello", &mut clip);
        let backend = draw_field(&f, &theme, 200);
        assert!(backend.has_text("Hello"));
        assert_eq!(backend.text_color("Hello"), Some(theme.text_primary));
    }

    #[test]
    fn draw_placeholder_when_empty() {
        let theme = Theme::dark();
        let f = TextField::new(10).with_placeholder("Type here...");
        let backend = draw_field(&f, &theme, 200);
        assert_eq!(backend.text_color("Type here..."), Some(theme.text_disabled));
    }

    #[test]
    fn draw_cursor_after_text() {
        let theme = Theme::dark();
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "AB", &mut clip);
        let backend = draw_field(&f, &theme, 200);
        // Two 16px glyphs after the padding.
        assert_eq!(
            backend.fills_with(theme.text_primary),
            vec![(TEXT_PADDING + 32, TEXT_PADDING, 2, 30)]
        );
    }

    #[test]
    fn no_cursor_when_unfocused_or_blinked_off() {
        let theme = Theme::dark();
        let mut clip = MemoryClipboard::new();
        let mut f = focused(10);
        type_str(&mut f, "AB", &mut clip);
        f.tick(1.0);
        assert!(draw_field(&f, &theme, 200)
            .fills_with(theme.text_primary)
            .is_empty());

        let idle = TextField::new(10);
        assert!(draw_field(&idle, &theme, 200)
            .fills_with(theme.text_primary)
            .is_empty());
    }

    #[test]
    fn draw_focused_border_color() {
        let theme = Theme::dark();
        let f = focused(10);
        assert!(draw_field(&f, &theme, 200).has_fill_color(theme.input_border_focus));
        let idle = TextField::new(10);
        let backend = draw_field(&idle, &theme, 200);
        assert!(backend.has_fill_color(theme.input_border));
        assert!(!backend.has_fill_color(theme.input_border_focus));
    }

    #[test]
    fn draw_selection_highlight() {
        let theme = Theme::dark();
        let f = with_selection("hello", 1, 4);
        let backend = draw_field(&f, &theme, 200);
        let text_h = (theme.font_size_md as f32 * 1.2) as u32;
        let ty = layout::center(40, text_h);
        assert_eq!(
            backend.fills_with(theme.selection_bg),
            vec![(TEXT_PADDING + 16, ty, 48, text_h)]
        );
    }

    #[test]
    fn long_text_scrolls_left() {
        let theme = Theme::dark();
        let mut clip = MemoryClipboard::new();
        let mut f = focused(20);
        type_str(&mut f, "abcdefghij", &mut clip);
        // 160px of text in a 90px inner box.
        let backend = draw_field(&f, &theme, 100);
        let (_, x, _, _) = backend.text_positions()[0];
        assert_eq!(x, TEXT_PADDING - 70);
    }

    #[test]
    fn draw_is_clipped_to_inner_box() {
        let theme = Theme::dark();
        let f = TextField::new(10);
        let backend = draw_field(&f, &theme, 200);
        assert!(backend.calls.contains(&DrawCall::SetClip {
            x: TEXT_PADDING,
            y: 1,
            w: 190,
            h: 38,
        }));
        assert_eq!(backend.calls.last(), Some(&DrawCall::ResetClip));
    }

    #[test]
    fn font_metrics_measures_through_backend() {
        let backend = MockBackend::new();
        let m = FontMetrics::new(&backend, 16);
        assert_eq!(m.text_width("abc"), 48);
        assert_eq!(m.text_width(""), 0);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Key(Key, Modifiers),
            Press(i32, bool),
            Drag(i32),
            Release,
            Tick(f64),
            ClipboardDown(bool),
        }

        fn key_strategy() -> impl Strategy<Value = Key> {
            prop_oneof![
                proptest::char::range('a', 'z').prop_map(Key::Char),
                Just(Key::Char('é')),
                proptest::sample::select(vec![
                    Key::Backspace,
                    Key::Delete,
                    Key::Left,
                    Key::Right,
                    Key::Home,
                    Key::End,
                    Key::Enter,
                ]),
            ]
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (key_strategy(), any::<bool>(), proptest::bool::weighted(0.2))
                    .prop_map(|(k, shift, ctrl_or_cmd)| Op::Key(k, Modifiers { shift, ctrl_or_cmd })),
                1 => (-20i32..220, any::<bool>()).prop_map(|(x, s)| Op::Press(x, s)),
                1 => (-20i32..220).prop_map(Op::Drag),
                1 => Just(Op::Release),
                1 => (0.0f64..10.0).prop_map(Op::Tick),
                1 => any::<bool>().prop_map(Op::ClipboardDown),
            ]
        }

        proptest! {
            #[test]
            fn invariants_hold_after_every_event(
                ops in proptest::collection::vec(op_strategy(), 0..80),
            ) {
                let mut clip = MemoryClipboard::with_text("pasted!");
                let mut f = TextField::new(8);
                f.set_bounds(BOUNDS);
                for op in ops {
                    match op {
                        Op::Key(k, m) => {
                            let submit = f.handle_key(k, m, &mut clip);
                            prop_assert_eq!(submit, f.is_focused() && k == Key::Enter);
                        },
                        Op::Press(x, shift) => f.handle_pointer_press(x, 20, shift, &MONO),
                        Op::Drag(x) => f.handle_pointer_drag(x, 20, &MONO),
                        Op::Release => f.handle_pointer_release(),
                        Op::Tick(t) => f.tick(t),
                        Op::ClipboardDown(down) => clip.set_unavailable(down),
                    }
                    let len = f.len();
                    prop_assert!(f.cursor() <= len, "cursor {} > len {}", f.cursor(), len);
                    prop_assert!(len <= f.max_length());
                    if let Some(a) = f.anchor() {
                        prop_assert!(a <= len, "anchor {} > len {}", a, len);
                    }
                    if let Some((lo, hi)) = f.selection() {
                        prop_assert!(lo < hi);
                    }
                }
            }

            #[test]
            fn deleting_selection_parks_cursor_at_lower_bound(
                text in "[a-z]{1,8}",
                a in 0usize..9,
                c in 0usize..9,
            ) {
                let len = text.chars().count();
                let (a, c) = (a.min(len), c.min(len));
                prop_assume!(a != c);
                let mut clip = MemoryClipboard::new();
                let mut f = with_selection(&text, a, c);
                f.handle_key(Key::Backspace, Modifiers::NONE, &mut clip);
                prop_assert_eq!(f.cursor(), a.min(c));
                prop_assert_eq!(f.anchor(), None);
                prop_assert_eq!(f.len(), len - a.abs_diff(c));
            }
        }
    }
}
