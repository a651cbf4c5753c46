use ratatui::{
    Frame,
    crossterm::event::KeyEvent,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// Single-line filter box shown above a table
pub struct SearchField {
    active: bool,
    textarea: TextArea<'static>,
    placeholder: &'static str,
}

impl SearchField {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            active: false,
            textarea: create_search_textarea(),
            placeholder,
        }
    }

    /// Whether keystrokes currently go to the field
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop typing but keep the query applied
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Feed a keystroke. Returns true when the query text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.query().to_string();
        self.textarea.input(key);
        self.query() != before
    }

    /// Empty the field. Returns true when there was text to clear.
    pub fn clear(&mut self) -> bool {
        if self.query().is_empty() {
            return false;
        }
        self.textarea.select_all();
        self.textarea.cut();
        true
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.active {
            theme::search::BORDER_ACTIVE
        } else {
            theme::search::BORDER_INACTIVE
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border)),
        );
        self.textarea.set_style(Style::default().fg(theme::search::TEXT));
        self.textarea.set_placeholder_text(self.placeholder);
        if self.active {
            self.textarea.set_cursor_style(theme::palette::CURSOR);
        } else {
            self.textarea.set_cursor_style(Style::default());
        }
        frame.render_widget(&self.textarea, area);
    }
}
