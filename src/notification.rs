//! Notification module for worknest
//!
//! A process-wide store of transient success/error messages. Any tab or
//! action handler can publish through a cloned [`NotificationStore`] handle;
//! a single overlay renders the live entries on every frame.

mod notification_render;
mod notification_store;

pub use notification_render::render_notifications;
pub use notification_store::{
    DEFAULT_TTL, Notification, NotificationId, NotificationKind, NotificationStore,
};
