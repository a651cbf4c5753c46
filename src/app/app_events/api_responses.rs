//! Applying worker responses to the tabs

use super::super::app_state::App;
use crate::api::{ApiAction, ApiError, ApiResponse, Payload};

pub fn handle_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::Loaded { request_id, result } => apply_loaded(app, request_id, result),
        ApiResponse::ActionDone { action, result } => apply_action_result(app, action, result),
        ApiResponse::WorkerFailed(message) => {
            log::error!("API worker failed: {}", message);
            app.notifications.error(message);
        }
    }
}

/// Route a fetch result to the tab still waiting on `request_id`. A result
/// no tab is waiting for was superseded by a newer fetch and is dropped.
fn apply_loaded(app: &mut App, request_id: u64, result: Result<Payload, ApiError>) {
    let error = if app.employees.list.is_pending(request_id) {
        app.employees.on_loaded(result)
    } else if app.leave_approvals.list.is_pending(request_id) {
        app.leave_approvals.on_loaded(result)
    } else if app.monthly_leaves.list.is_pending(request_id) {
        app.monthly_leaves.on_loaded(result)
    } else if app.absences.list.is_pending(request_id) {
        app.absences.on_loaded(result)
    } else {
        log::debug!("Dropping stale response for request {}", request_id);
        None
    };

    if let Some(message) = error {
        log::error!("{}", message);
        app.notifications.error(message);
    }
}

fn apply_action_result(app: &mut App, action: ApiAction, result: Result<(), ApiError>) {
    if let Err(err) = result {
        log::error!("{:?} failed: {}", action, err);
        app.notifications.error(action.failure_message(&err));
        return;
    }

    app.notifications.success(action.success_message());

    match &action {
        ApiAction::DeleteEmployee { id, .. } => app.employees.on_deleted(id),
        ApiAction::UpdateLeaveStatus {
            leave_id, status, ..
        } => {
            app.leave_approvals.on_status_updated(leave_id, *status);
            app.monthly_leaves.on_status_updated(leave_id, *status);
        }
        ApiAction::DeleteAbsence { id, .. } => app.absences.on_deleted(id),
    }
}
