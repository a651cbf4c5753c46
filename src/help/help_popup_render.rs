use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::help::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
use crate::theme;
use crate::widgets::popup;

/// Render the help popup centered on the frame
///
/// Returns the popup area, or `None` when the terminal is too small.
pub fn render_popup(frame: &mut Frame) -> Option<Rect> {
    let frame_area = frame.area();

    if frame_area.width < 40 || frame_area.height < 12 {
        return None;
    }

    let lines = render_help_sections(HELP_SECTIONS);

    // Content plus border and footer, capped to the screen
    let popup_width = 60.min(frame_area.width.saturating_sub(4));
    let popup_height = (lines.len() as u16 + 3).min(frame_area.height.saturating_sub(2));

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(theme::help::BORDER))
        .style(Style::default().bg(theme::help::BACKGROUND));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner_area);

    frame.render_widget(Paragraph::new(Text::from(lines)), content_area);

    let footer = Line::from(Span::styled(
        HELP_FOOTER,
        Style::default().fg(theme::help::FOOTER),
    ));
    frame.render_widget(Paragraph::new(footer).centered(), footer_area);

    Some(popup_area)
}

fn render_help_sections(sections: &[HelpSection]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (section_idx, section) in sections.iter().enumerate() {
        if section_idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("── {} ──", section.title),
                theme::help::SECTION_HEADER,
            ),
        ]));

        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<15}", key), theme::help::KEY),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }
    }

    lines
}
