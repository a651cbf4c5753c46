use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::super::app_state::App;
use crate::tabs::TabKind;

/// Keys that work the same on every tab. Returns true when consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if app.help_visible {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.help_visible = false;
        }
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.help_visible = true;
        }
        KeyCode::Tab => {
            app.activate_tab(app.active_tab.next());
        }
        KeyCode::BackTab => {
            app.activate_tab(app.active_tab.prev());
        }
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(tab) = c
                .to_digit(10)
                .and_then(|d| TabKind::from_index(d as usize - 1))
            {
                app.activate_tab(tab);
            }
        }
        KeyCode::Char('r') => {
            app.reload_active();
        }
        KeyCode::Char('c') => {
            app.notifications.dismiss_latest();
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
