//! worknest library - Terminal client for the WorkNest HR API
//!
//! This library exposes the core functionality of worknest for testing purposes.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod model;
pub mod notification;
pub mod pager;
pub mod tabs;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use notification::NotificationStore;
pub use pager::Pager;
