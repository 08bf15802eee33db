//! Foundation types and traits for relay.
//!
//! This crate contains the platform-agnostic core types shared by all relay
//! crates: colors, input events, backend trait definitions, the clipboard
//! capability, configuration, error types, and the built-in bitmap font.

pub mod backend;
pub mod bitmap_font;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
