use chrono::NaiveDate;
use ratatui::{
    Frame,
    crossterm::event::KeyEvent,
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Row},
};

use super::list_state::ListState;
use super::search_field::SearchField;
use super::table_render::{TableLayout, render_list};
use super::{hint_spans, month_bar_line, month_start, shift_month};
use crate::api::{ApiAction, ApiError, ApiHandle, FetchTarget, Payload};
use crate::model::AbsenceRecord;

const TABLE: TableLayout<'static> = TableLayout {
    title: "Absences",
    headers: &["#", "Employee", "Date", "Type", "Reason", "Marked by"],
    widths: &[
        Constraint::Length(5),
        Constraint::Percentage(22),
        Constraint::Length(11),
        Constraint::Length(10),
        Constraint::Percentage(30),
        Constraint::Percentage(18),
    ],
    empty_message: "No absences recorded this month.",
};

/// Absence records of one month, searchable by employee name
pub struct AbsencesTab {
    pub list: ListState<AbsenceRecord>,
    pub search: SearchField,
    month: NaiveDate,
}

impl AbsencesTab {
    pub fn new(page_size: usize, today: NaiveDate) -> Self {
        Self {
            list: ListState::new(page_size),
            search: SearchField::new("Search by employee name..."),
            month: month_start(today),
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn reload(&mut self, api: &mut ApiHandle) {
        self.list
            .begin_load(api.fetch(FetchTarget::Absences(self.month)));
    }

    pub fn change_month(&mut self, delta: i32, api: &mut ApiHandle) {
        let month = shift_month(self.month, delta);
        if month != self.month {
            self.month = month;
            self.list.pager.reset();
            self.reload(api);
        }
    }

    pub fn on_loaded(&mut self, result: Result<Payload, ApiError>) -> Option<String> {
        match result {
            Ok(Payload::Absences(records)) => {
                let query = self.search.query().to_string();
                self.list.finish_load(records, |r| r.matches(&query));
                None
            }
            Ok(_) => {
                let message = "Unexpected payload for absences".to_string();
                self.list.fail_load(message.clone());
                Some(message)
            }
            Err(err) => {
                let message = super::load_error_message("absences", &err);
                self.list.fail_load(message.clone());
                Some(message)
            }
        }
    }

    pub fn handle_search_key(&mut self, key: KeyEvent) {
        if self.search.handle_key(key) {
            self.apply_search();
        }
    }

    pub fn clear_search(&mut self) {
        if self.search.clear() {
            self.apply_search();
        }
    }

    fn apply_search(&mut self) {
        let query = self.search.query().to_string();
        self.list.apply_new_filter(|r| r.matches(&query));
    }

    pub fn delete_selected(&self) -> Option<ApiAction> {
        self.list
            .selected_item()
            .map(|record| ApiAction::DeleteAbsence {
                id: record.id.clone(),
                employee_name: record.employee_name.clone(),
            })
    }

    pub fn on_deleted(&mut self, id: &str) {
        let query = self.search.query().to_string();
        self.list.remove_where(|r| r.id == id, |r| r.matches(&query));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, bar_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .areas(area);

        self.search.render(frame, search_area);
        frame.render_widget(
            Paragraph::new(month_bar_line(self.month, hint_spans("[/]", "month"))),
            bar_area,
        );
        render_list(frame, list_area, &TABLE, &self.list, |number, r| {
            Row::new(vec![
                number.to_string(),
                r.employee_name.clone(),
                r.date.clone(),
                r.absent_type.clone(),
                r.reason.clone(),
                r.marked_by_name.clone(),
            ])
        });
    }
}

#[cfg(test)]
#[path = "absences_tests.rs"]
mod absences_tests;
