//! Per-frame drawing.

use relay_types::backend::SdiBackend;
use relay_types::error::Result;
use relay_ui::{DrawContext, Widget, layout};

use crate::app_state::AppState;

/// Clear the window and draw the field, the button and the last command.
/// Presenting the frame is left to the caller.
pub fn draw_frame(state: &AppState, backend: &mut dyn SdiBackend) -> Result<()> {
    let theme = &state.theme;
    backend.clear(theme.background)?;
    let mut ctx = DrawContext::new(backend, theme);

    let f = state.field.bounds();
    state.field.draw(&mut ctx, f.x, f.y, f.w, f.h)?;

    let b = state.submit_button.bounds();
    state.submit_button.draw(&mut ctx, b.x, b.y, b.w, b.h)?;

    if let Some(cmd) = &state.last_command {
        let line = cmd.summary();
        let fs = theme.font_size_sm;
        let w = ctx.backend.measure_text(&line, fs);
        let x = layout::center(state.config.screen_width, w);
        let y = b.y + b.h as i32 + theme.spacing_lg as i32;
        ctx.label_styled(&line, x, y, fs, theme.text_secondary)?;
    }
    Ok(())
}
