//! relay-ui: widget toolkit built on `SdiBackend`.
//!
//! This crate provides layout helpers, a themed drawing context, and the two
//! widgets the command window needs: an editable single-line `TextField` and
//! a clickable `Button`. All rendering goes through `SdiBackend` trait
//! methods -- no platform-specific code.

pub mod button;
pub mod context;
pub mod layout;
pub mod text_field;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use button::Button;
pub use context::DrawContext;
pub use layout::{Padding, Rect};
pub use text_field::{FontMetrics, TextField, TextMeasure};
pub use theme::Theme;
pub use widget::Widget;
