//! Tabs module
//!
//! One tab per backend collection. Each tab owns a `ListState` (records,
//! filter, pager, selection) and knows which fetch fills it.

mod absences;
mod employees;
mod leave_approvals;
pub mod list_state;
mod monthly_leaves;
mod search_field;
pub mod table_render;

pub use absences::AbsencesTab;
pub use employees::EmployeesTab;
pub use leave_approvals::LeaveApprovalsTab;
pub use list_state::{ListState, LoadState};
pub use monthly_leaves::{MonthlyLeavesTab, StatusFilter};
pub use search_field::SearchField;

use chrono::{Datelike, Months, NaiveDate};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::api::ApiError;
use crate::theme;

/// Which tab is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabKind {
    #[default]
    Employees,
    LeaveApprovals,
    MonthlyLeaves,
    Absences,
}

impl TabKind {
    pub const ALL: [TabKind; 4] = [
        TabKind::Employees,
        TabKind::LeaveApprovals,
        TabKind::MonthlyLeaves,
        TabKind::Absences,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TabKind::Employees => "Employees",
            TabKind::LeaveApprovals => "Leave Approvals",
            TabKind::MonthlyLeaves => "Monthly Leaves",
            TabKind::Absences => "Absences",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TabKind::Employees => 0,
            TabKind::LeaveApprovals => 1,
            TabKind::MonthlyLeaves => 2,
            TabKind::Absences => 3,
        }
    }

    /// Tab at 0-based `index`, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move `month` (a first-of-month date) by `delta` months. Out-of-range
/// shifts leave the month unchanged.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        month.checked_add_months(months)
    } else {
        month.checked_sub_months(months)
    };
    shifted.map(month_start).unwrap_or(month)
}

pub fn month_label(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// "‹ [ April 2025 ] ›" followed by optional extra spans
pub fn month_bar_line(month: NaiveDate, extra: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled("[ ‹ ", theme::pager::NAV_ENABLED),
        Span::styled(month_label(month), theme::pager::CURRENT),
        Span::styled(" › ]", theme::pager::NAV_ENABLED),
    ];
    spans.extend(extra);
    Line::from(spans)
}

/// Dim " key label" hint span pair used in tab header lines
pub fn hint_spans(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(theme::help_line::KEY)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(theme::help_line::DESCRIPTION)),
    ]
}

pub(crate) fn load_error_message(what: &str, err: &ApiError) -> String {
    format!("Error fetching {}: {}", what, err)
}
