//! Help module
//!
//! Keyboard shortcut reference: the one-line hint bar and the `?` popup.

mod help_content;
pub mod help_line_render;
pub mod help_popup_render;

pub use help_content::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
