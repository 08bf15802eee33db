//! Error types for relay.

use std::io;

/// The OS clipboard could not be read or written.
///
/// Kept separate from [`RelayError`] so that [`Clipboard`] implementations
/// only ever report this one failure mode.
///
/// [`Clipboard`]: crate::clipboard::Clipboard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardUnavailable(pub String);

/// Errors produced by the relay framework.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardUnavailable),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RelayError>;
