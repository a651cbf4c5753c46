//! Notification rendering
//!
//! Draws live notifications as stacked toasts in the top-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_store::{Notification, NotificationStore};
use crate::widgets::popup;

const TOAST_HEIGHT: u16 = 3;
const MARGIN: u16 = 1;
const MIN_WIDTH: u16 = 5;

fn toast_width(notification: &Notification, frame_area: Rect) -> u16 {
    // message + 2 padding + 2 borders
    let content_width = u16::try_from(notification.message.chars().count()).unwrap_or(u16::MAX);
    content_width
        .saturating_add(4)
        .min(frame_area.width.saturating_sub(MARGIN * 2))
}

fn render_toast(frame: &mut Frame, notification: &Notification, area: Rect) {
    let colors = notification.kind.colors();

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notification.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Render live notifications, oldest on top
///
/// Call after the main UI so toasts appear above other content. Expired
/// entries are dropped from the store first. Toasts that do not fit below
/// the ones already drawn are skipped until space frees up.
///
/// Returns the number of toasts drawn.
pub fn render_notifications(frame: &mut Frame, store: &NotificationStore) -> usize {
    store.remove_expired();

    let frame_area = frame.area();
    let mut y = MARGIN;
    let mut drawn = 0;

    for notification in store.list() {
        if y.saturating_add(TOAST_HEIGHT) > frame_area.height {
            break;
        }

        let width = toast_width(&notification, frame_area);
        if width < MIN_WIDTH {
            break;
        }

        let area = popup::top_right(frame_area, width, TOAST_HEIGHT, MARGIN, y);
        render_toast(frame, &notification, area);

        y += TOAST_HEIGHT;
        drawn += 1;
    }

    drawn
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
