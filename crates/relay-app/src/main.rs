//! relay desktop entry point.
//!
//! A fixed-size window with one command text field and a Submit button.
//! Enter or a click on Submit logs the text, parses it into a command and
//! clears the field. Close the window to quit.
//!
//! Configuration comes from the TOML file named by the first argument or
//! the `RELAY_CONFIG` environment variable, falling back to defaults.

mod app_state;
mod command;
mod input;
mod render;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use app_state::AppState;
use relay_backend_sdl::SdlBackend;
use relay_types::backend::{InputBackend, SdiBackend};
use relay_types::clipboard::{Clipboard, MemoryClipboard};
use relay_types::config::{ClipboardMode, RelayConfig};
use relay_ui::{FontMetrics, Theme};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting relay ({}x{} @ {} fps)",
        config.screen_width,
        config.screen_height,
        config.target_fps,
    );

    let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
        log::warn!("unknown theme {:?}, using classic", config.theme);
        Theme::classic()
    });

    let mut backend = SdlBackend::new(
        &config.window_title,
        config.screen_width,
        config.screen_height,
    )?;
    backend.init(config.screen_width, config.screen_height)?;

    let mut clipboard: Box<dyn Clipboard> = match config.text_field.clipboard {
        ClipboardMode::System => Box::new(backend.clipboard()),
        ClipboardMode::Memory => Box::new(MemoryClipboard::new()),
    };
    log::info!("Clipboard: {:?}", config.text_field.clipboard);

    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(config.target_fps));
    let mut state = AppState::new(config, theme);
    let start = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        let events = backend.poll_events();
        {
            let metrics = FontMetrics::new(&backend, state.theme.font_size_md);
            for event in &events {
                let result = input::handle_event(event, &mut state, &metrics, clipboard.as_mut());
                if result == input::InputResult::Quit {
                    break 'running;
                }
            }
        }

        state.field.tick(start.elapsed().as_secs_f64());

        render::draw_frame(&state, &mut backend)?;
        backend.swap_buffers()?;

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    backend.shutdown()?;
    log::info!("relay exited cleanly");
    Ok(())
}

/// Config path from the first CLI argument, then `RELAY_CONFIG`.
fn load_config() -> Result<RelayConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("RELAY_CONFIG").ok());
    match path {
        Some(p) => RelayConfig::load(Path::new(&p)).with_context(|| format!("loading config {p}")),
        None => {
            log::info!("No config file given, using defaults");
            Ok(RelayConfig::default())
        },
    }
}
