use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row},
};

use super::list_state::ListState;
use super::table_render::{TableLayout, render_list, status_span};
use super::{hint_spans, month_bar_line, month_start, shift_month};
use crate::api::{ApiError, ApiHandle, FetchTarget, Payload};
use crate::model::{LeaveRequest, LeaveStatus};
use crate::theme;

const TABLE: TableLayout<'static> = TableLayout {
    title: "Leave Requests",
    headers: &[
        "#", "Employee", "Title", "Type", "From", "To", "Days", "Status", "Marked by",
    ],
    widths: &[
        Constraint::Length(5),
        Constraint::Percentage(18),
        Constraint::Percentage(18),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Percentage(15),
    ],
    empty_message: "No leave requests for this month.",
};

/// Which statuses the monthly list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeaveStatus),
}

impl StatusFilter {
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(LeaveStatus::Pending),
            StatusFilter::Only(LeaveStatus::Pending) => StatusFilter::Only(LeaveStatus::Approved),
            StatusFilter::Only(LeaveStatus::Approved) => StatusFilter::Only(LeaveStatus::Rejected),
            StatusFilter::Only(LeaveStatus::Rejected) => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(self, leave: &LeaveRequest) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => leave.status == status,
        }
    }
}

/// Every leave request of one month, filterable by status
pub struct MonthlyLeavesTab {
    pub list: ListState<LeaveRequest>,
    pub filter: StatusFilter,
    month: NaiveDate,
}

impl MonthlyLeavesTab {
    pub fn new(page_size: usize, today: NaiveDate) -> Self {
        Self {
            list: ListState::new(page_size),
            filter: StatusFilter::default(),
            month: month_start(today),
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn reload(&mut self, api: &mut ApiHandle) {
        self.list
            .begin_load(api.fetch(FetchTarget::MonthlyLeaves(self.month)));
    }

    /// Move `delta` months and refetch
    pub fn change_month(&mut self, delta: i32, api: &mut ApiHandle) {
        let month = shift_month(self.month, delta);
        if month != self.month {
            self.month = month;
            self.list.pager.reset();
            self.reload(api);
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        let keep = shown(self.month, self.filter);
        self.list.apply_new_filter(keep);
    }

    pub fn on_loaded(&mut self, result: Result<Payload, ApiError>) -> Option<String> {
        match result {
            Ok(Payload::Leaves(leaves)) => {
                let keep = shown(self.month, self.filter);
                self.list.finish_load(leaves, keep);
                None
            }
            Ok(_) => {
                let message = "Unexpected payload for monthly leaves".to_string();
                self.list.fail_load(message.clone());
                Some(message)
            }
            Err(err) => {
                let message = super::load_error_message("monthly leaves", &err);
                self.list.fail_load(message.clone());
                Some(message)
            }
        }
    }

    pub fn on_status_updated(&mut self, leave_id: &str, status: LeaveStatus) {
        let keep = shown(self.month, self.filter);
        self.list
            .update_where(|l| l.id == leave_id, |l| l.status = status, keep);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [bar_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).areas(area);

        let mut extra = hint_spans("[/]", "month");
        extra.push(Span::raw("   Status: "));
        extra.push(Span::styled(
            self.filter.label(),
            Style::default().fg(theme::palette::CYAN),
        ));
        extra.extend(hint_spans("f", "cycle"));
        frame.render_widget(Paragraph::new(month_bar_line(self.month, extra)), bar_area);

        render_list(frame, list_area, &TABLE, &self.list, |number, l| {
            Row::new(vec![
                Cell::from(number.to_string()),
                Cell::from(l.employee_name.clone()),
                Cell::from(l.leave_title.clone()),
                Cell::from(l.leave_type.clone()),
                Cell::from(l.start_date.clone()),
                Cell::from(l.end_date.clone()),
                Cell::from(l.total_leave_days.to_string()),
                Cell::from(Line::from(status_span(l.status))),
                Cell::from(l.marked_by_name.clone().unwrap_or_else(|| "-".to_string())),
            ])
        });
    }
}

/// Requests that start in `month` and pass `filter`
fn shown(month: NaiveDate, filter: StatusFilter) -> impl Fn(&LeaveRequest) -> bool {
    move |l| l.starts_in(month) && filter.matches(l)
}

#[cfg(test)]
#[path = "monthly_leaves_tests.rs"]
mod monthly_leaves_tests;
