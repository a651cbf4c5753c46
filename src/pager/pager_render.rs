//! Pager bar rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::pager_state::{PageIndicator, Pager};
use crate::theme;

fn nav_span(symbol: &'static str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        theme::pager::NAV_ENABLED
    } else {
        theme::pager::NAV_DISABLED
    };
    Span::styled(symbol, style)
}

fn indicator_span(indicator: PageIndicator, current_page: usize) -> Span<'static> {
    match indicator {
        PageIndicator::Page(page) if page == current_page => {
            Span::styled(format!("[{}]", page), theme::pager::CURRENT)
        }
        PageIndicator::Page(page) => {
            Span::styled(page.to_string(), Style::default().fg(theme::pager::PAGE))
        }
        PageIndicator::Ellipsis => {
            Span::styled("\u{2026}", Style::default().fg(theme::pager::ELLIPSIS))
        }
    }
}

/// Build the `« ‹ 1 … 4 5 [6] 7 8 … 20 › »` line for a pager
pub fn build_pager_line(pager: &Pager) -> Line<'static> {
    let mut parts = vec![
        nav_span("\u{ab}", pager.has_prev()),
        nav_span("\u{2039}", pager.has_prev()),
    ];
    parts.extend(
        pager
            .indicators()
            .into_iter()
            .map(|indicator| indicator_span(indicator, pager.current_page())),
    );
    parts.push(nav_span("\u{203a}", pager.has_next()));
    parts.push(nav_span("\u{bb}", pager.has_next()));

    let mut spans = Vec::with_capacity(parts.len() * 2);
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(part);
    }

    Line::from(spans)
}

/// Render the pager bar centered in `area`
pub fn render_pager(frame: &mut Frame, area: Rect, pager: &Pager) {
    let paragraph = Paragraph::new(build_pager_line(pager)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "pager_render_tests.rs"]
mod pager_render_tests;
