use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tabs::TabKind;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.confirm.is_some() {
        hints!["y/Enter" => "Confirm", "n/Esc" => "Cancel"]
    } else if app.help_visible {
        hints!["?/Esc" => "Close help"]
    } else if app.search_active() {
        hints!["Enter/Esc" => "Done", "Ctrl+U" => "Clear", "Ctrl+C" => "Quit"]
    } else {
        match app.active_tab {
            TabKind::Employees => {
                hints!["?" => "Help", "Tab" => "Next tab", "←/→" => "Page", "/" => "Search", "d" => "Delete", "r" => "Reload", "q" => "Quit"]
            }
            TabKind::LeaveApprovals => {
                hints!["?" => "Help", "Tab" => "Next tab", "←/→" => "Page", "a" => "Approve", "x" => "Reject", "r" => "Reload", "q" => "Quit"]
            }
            TabKind::MonthlyLeaves => {
                hints!["?" => "Help", "Tab" => "Next tab", "←/→" => "Page", "[/]" => "Month", "f" => "Status", "r" => "Reload", "q" => "Quit"]
            }
            TabKind::Absences => {
                hints!["?" => "Help", "Tab" => "Next tab", "←/→" => "Page", "/" => "Search", "[/]" => "Month", "d" => "Delete", "q" => "Quit"]
            }
        }
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{manager_session, test_app};

    fn keys(app: &App) -> Vec<&'static str> {
        get_context_hints(app).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_hints_follow_active_tab() {
        let mut harness = test_app(manager_session());

        assert!(keys(&harness.app).contains(&"d"));

        harness.app.active_tab = TabKind::LeaveApprovals;
        assert!(keys(&harness.app).contains(&"a"));

        harness.app.active_tab = TabKind::MonthlyLeaves;
        assert!(keys(&harness.app).contains(&"f"));
    }

    #[test]
    fn test_help_hint_takes_precedence() {
        let mut harness = test_app(manager_session());
        harness.app.help_visible = true;

        assert_eq!(keys(&harness.app), vec!["?/Esc"]);
    }

    #[test]
    fn test_spans_separated_by_bullets() {
        let spans = build_styled_spans(&hints!["a" => "One", "b" => "Two"]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, " a One \u{2022} b Two");
    }
}
