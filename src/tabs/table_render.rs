use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use super::list_state::{ListState, LoadState};
use crate::model::LeaveStatus;
use crate::pager::render_pager;
use crate::theme;

/// Static description of a tab's table
pub struct TableLayout<'a> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub widths: &'a [Constraint],
    pub empty_message: &'a str,
}

/// Render a bordered table of the current page plus the pager bar below it.
///
/// `row` receives the 1-based row number across all pages and the record.
pub fn render_list<T>(
    frame: &mut Frame,
    area: Rect,
    layout: &TableLayout<'_>,
    list: &ListState<T>,
    row: impl Fn(usize, &T) -> Row<'static>,
) {
    let [table_area, pager_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let border_color = if list.is_loading() {
        theme::table::BORDER_LOADING
    } else {
        theme::table::BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", layout.title, list.filtered_len()))
        .border_style(Style::default().fg(border_color));

    let visible = list.visible();

    if visible.is_empty() {
        let message = match list.load_state() {
            LoadState::Idle | LoadState::Loading => {
                Span::styled("Loading...", Style::default().fg(theme::table::LOADING))
            }
            LoadState::Failed(err) => {
                Span::styled(err.clone(), Style::default().fg(theme::table::LOAD_ERROR))
            }
            LoadState::Loaded => Span::styled(
                layout.empty_message.to_string(),
                Style::default().fg(theme::table::EMPTY),
            ),
        };
        let paragraph = Paragraph::new(Line::from(message)).centered().block(block);
        frame.render_widget(paragraph, table_area);
    } else {
        let rows: Vec<Row> = visible
            .into_iter()
            .enumerate()
            .map(|(i, item)| row(list.pager.row_number(i), item))
            .collect();

        let header = Row::new(layout.headers.iter().copied()).style(theme::table::HEADER);

        let table = Table::new(rows, layout.widths.iter().copied())
            .header(header)
            .block(block)
            .style(Style::default().fg(theme::table::ROW))
            .row_highlight_style(
                Style::default()
                    .bg(theme::table::ROW_SELECTED_BG)
                    .fg(theme::table::ROW_SELECTED_INDICATOR),
            )
            .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(list.selected()));
        frame.render_stateful_widget(table, table_area, &mut state);
    }

    render_pager(frame, pager_area, &list.pager);
}

/// Colored status cell text for leave tables
pub fn status_span(status: LeaveStatus) -> Span<'static> {
    let color = match status {
        LeaveStatus::Pending => theme::table::STATUS_PENDING,
        LeaveStatus::Approved => theme::table::STATUS_APPROVED,
        LeaveStatus::Rejected => theme::table::STATUS_REJECTED,
    };
    Span::styled(status.label(), Style::default().fg(color))
}
