use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row},
};

use super::list_state::ListState;
use super::table_render::{TableLayout, render_list, status_span};
use crate::api::{ApiAction, ApiError, ApiHandle, FetchTarget, Payload};
use crate::model::{LeaveRequest, LeaveStatus};

const TABLE: TableLayout<'static> = TableLayout {
    title: "Pending Leave Requests",
    headers: &["#", "Employee", "Title", "Type", "From", "To", "Days", "Status"],
    widths: &[
        Constraint::Length(5),
        Constraint::Percentage(20),
        Constraint::Percentage(22),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(5),
        Constraint::Length(9),
    ],
    empty_message: "No pending leave requests.",
};

/// Pending leave requests a manager can approve or reject
pub struct LeaveApprovalsTab {
    pub list: ListState<LeaveRequest>,
}

impl LeaveApprovalsTab {
    pub fn new(page_size: usize) -> Self {
        Self {
            list: ListState::new(page_size),
        }
    }

    pub fn reload(&mut self, api: &mut ApiHandle) {
        self.list.begin_load(api.fetch(FetchTarget::PendingLeaves));
    }

    pub fn on_loaded(&mut self, result: Result<Payload, ApiError>) -> Option<String> {
        match result {
            Ok(Payload::Leaves(leaves)) => {
                self.list.finish_load(leaves, |_| true);
                None
            }
            Ok(_) => {
                let message = "Unexpected payload for leave requests".to_string();
                self.list.fail_load(message.clone());
                Some(message)
            }
            Err(err) => {
                let message = super::load_error_message("leave requests", &err);
                self.list.fail_load(message.clone());
                Some(message)
            }
        }
    }

    /// Approve/reject action for the selected request, or why there is none
    pub fn decide_selected(
        &self,
        marked_by: &str,
        status: LeaveStatus,
    ) -> Result<ApiAction, &'static str> {
        let leave = self
            .list
            .selected_item()
            .ok_or("No leave request selected")?;
        if leave.status != LeaveStatus::Pending {
            return Err("This leave request has already been decided");
        }
        Ok(ApiAction::UpdateLeaveStatus {
            leave_id: leave.id.clone(),
            employee_name: leave.employee_name.clone(),
            marked_by: marked_by.to_string(),
            status,
        })
    }

    /// The request stays listed with its new status until the next reload
    pub fn on_status_updated(&mut self, leave_id: &str, status: LeaveStatus) {
        self.list
            .update_where(|l| l.id == leave_id, |l| l.status = status, |_| true);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_list(frame, area, &TABLE, &self.list, |number, l| {
            Row::new(vec![
                Cell::from(number.to_string()),
                Cell::from(l.employee_name.clone()),
                Cell::from(l.leave_title.clone()),
                Cell::from(l.leave_type.clone()),
                Cell::from(l.start_date.clone()),
                Cell::from(l.end_date.clone()),
                Cell::from(l.total_leave_days.to_string()),
                Cell::from(Line::from(status_span(l.status))),
            ])
        });
    }
}

#[cfg(test)]
#[path = "leave_approvals_tests.rs"]
mod leave_approvals_tests;
