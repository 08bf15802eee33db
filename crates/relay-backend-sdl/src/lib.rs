//! SDL2 backend for relay.
//!
//! Implements `SdiBackend`, `InputBackend` and `Clipboard` using SDL2. Text
//! is drawn with the shared 8x8 bitmap font, scaled by whole pixels, so
//! `measure_text` is exact and hit-testing agrees with what is on screen.

mod clipboard;

use sdl2::EventPump;
use sdl2::VideoSubsystem;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{KeyboardUtil, Keycode, Mod};
use sdl2::mouse::MouseButton;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use relay_types::backend::{Color, InputBackend, SdiBackend};
use relay_types::bitmap_font;
use relay_types::error::{RelayError, Result};
use relay_types::input::{InputEvent, Key, Modifiers, PointerButton};

pub use clipboard::SdlClipboard;

fn backend_err(e: impl ToString) -> RelayError {
    RelayError::Backend(e.to_string())
}

/// SDL2 rendering and input backend.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    video: VideoSubsystem,
    keyboard: KeyboardUtil,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a window and start text input.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(backend_err)?;
        let video = sdl.video().map_err(backend_err)?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(backend_err)?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(backend_err)?;
        let event_pump = sdl.event_pump().map_err(backend_err)?;
        video.text_input().start();

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self {
            canvas,
            event_pump,
            keyboard: sdl.keyboard(),
            video,
        })
    }

    /// Handle to the OS clipboard.
    pub fn clipboard(&self) -> SdlClipboard {
        SdlClipboard::new(self.video.clipboard())
    }

    /// Set the SDL draw color, blending only when translucent.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(BlendMode::None);
        }
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
    }
}

impl SdiBackend for SdlBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(backend_err)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        let scale = bitmap_font::scale_for(font_size) as i32;
        let glyph_w = bitmap_font::GLYPH_WIDTH as i32 * scale;
        self.set_color(color);

        let mut cx = x;
        for ch in text.chars() {
            let rows = bitmap_font::glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..8i32 {
                    if bits & (0x80 >> col) == 0 {
                        continue;
                    }
                    let px = cx + col * scale;
                    let py = y + row as i32 * scale;
                    let _ = if scale == 1 {
                        self.canvas.draw_point(Point::new(px, py))
                    } else {
                        self.canvas
                            .fill_rect(Rect::new(px, py, scale as u32, scale as u32))
                    };
                }
            }
            cx += glyph_w;
        }
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.canvas.set_clip_rect(Rect::new(x, y, w, h));
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        self.canvas.set_clip_rect(None);
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        text.chars().count() as u32 * bitmap_font::GLYPH_WIDTH * bitmap_font::scale_for(font_size)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.video.text_input().stop();
        log::info!("SDL2 backend shut down");
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()> {
        if radius == 0 || w == 0 || h == 0 {
            return self.fill_rect(x, y, w, h, color);
        }
        let r = (radius as u32).min(w / 2).min(h / 2) as i32;
        self.set_color(color);

        // Body between the corner rows, then one span per corner row.
        let _ = self
            .canvas
            .fill_rect(Rect::new(x, y + r, w, h - r as u32 * 2));
        for dy in 0..r {
            let inset = corner_inset(r, dy);
            let span_w = w.saturating_sub(inset as u32 * 2);
            let _ = self
                .canvas
                .fill_rect(Rect::new(x + inset, y + dy, span_w, 1));
            let _ = self
                .canvas
                .fill_rect(Rect::new(x + inset, y + h as i32 - 1 - dy, span_w, 1));
        }
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        let sw = stroke_width.max(1) as u32;
        for i in 0..sw {
            let inner_w = w.saturating_sub(i * 2);
            let inner_h = h.saturating_sub(i * 2);
            if inner_w == 0 || inner_h == 0 {
                break;
            }
            let _ = self
                .canvas
                .draw_rect(Rect::new(x + i as i32, y + i as i32, inner_w, inner_h));
        }
        Ok(())
    }

    fn measure_text_height(&self, font_size: u16) -> u32 {
        bitmap_font::GLYPH_HEIGHT * bitmap_font::scale_for(font_size)
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let pointer_mods = modifiers_from(self.keyboard.mod_state());
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            if let Event::TextInput { text, .. } = &event {
                events.extend(text.chars().map(InputEvent::TextInput));
            } else if let Some(e) = map_sdl_event(event, pointer_mods) {
                log::trace!("input: {e:?}");
                events.push(e);
            }
        }
        events
    }
}

/// Map an SDL2 event to a relay input event. `pointer_mods` is the keyboard
/// state to attach to pointer presses, which SDL reports without modifiers.
fn map_sdl_event(event: Event, pointer_mods: Modifiers) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            keymod,
            ..
        } => {
            let modifiers = modifiers_from(keymod);
            map_key(keycode, modifiers).map(|key| InputEvent::KeyDown { key, modifiers })
        },
        Event::MouseMotion { x, y, .. } => Some(InputEvent::PointerMove { x, y }),
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => map_pointer_button(mouse_btn).map(|button| InputEvent::PointerPress {
            x,
            y,
            button,
            modifiers: pointer_mods,
        }),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputEvent::PointerRelease { x, y }),
        Event::Window {
            win_event: WindowEvent::FocusGained,
            ..
        } => Some(InputEvent::FocusGained),
        Event::Window {
            win_event: WindowEvent::FocusLost,
            ..
        } => Some(InputEvent::FocusLost),
        _ => None,
    }
}

fn modifiers_from(keymod: Mod) -> Modifiers {
    Modifiers {
        shift: keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
        ctrl_or_cmd: keymod
            .intersects(Mod::LCTRLMOD | Mod::RCTRLMOD | Mod::LGUIMOD | Mod::RGUIMOD),
    }
}

/// Editing and navigation keys, plus the clipboard shortcut letters when
/// ctrl/cmd is held. Plain letters arrive as `TextInput` instead.
fn map_key(keycode: Keycode, modifiers: Modifiers) -> Option<Key> {
    match keycode {
        Keycode::Backspace => Some(Key::Backspace),
        Keycode::Delete => Some(Key::Delete),
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Home => Some(Key::Home),
        Keycode::End => Some(Key::End),
        Keycode::Return | Keycode::KpEnter => Some(Key::Enter),
        Keycode::Escape => Some(Key::Escape),
        Keycode::Tab => Some(Key::Tab),
        Keycode::A if modifiers.ctrl_or_cmd => Some(Key::Char('a')),
        Keycode::C if modifiers.ctrl_or_cmd => Some(Key::Char('c')),
        Keycode::X if modifiers.ctrl_or_cmd => Some(Key::Char('x')),
        Keycode::V if modifiers.ctrl_or_cmd => Some(Key::Char('v')),
        _ => None,
    }
}

fn map_pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

/// Horizontal inset of row `dy` (0 = outermost) in a corner of radius `r`.
fn corner_inset(r: i32, dy: i32) -> i32 {
    let v = r - dy;
    let span = isqrt(r * r - v * v);
    r - span
}

/// Integer square root (floor).
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut x = (n as f32).sqrt() as i32;
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}
