//! Messages exchanged between the UI thread and the API worker

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

use super::ApiError;
use crate::model::{AbsenceRecord, Employee, LeaveRequest, LeaveStatus};

/// Collection a tab wants loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Employees,
    PendingLeaves,
    MonthlyLeaves(NaiveDate),
    Absences(NaiveDate),
}

/// Mutation submitted by a tab. Carries the display name so the completion
/// toast can mention who was affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiAction {
    DeleteEmployee {
        id: String,
        name: String,
    },
    UpdateLeaveStatus {
        leave_id: String,
        employee_name: String,
        marked_by: String,
        status: LeaveStatus,
    },
    DeleteAbsence {
        id: String,
        employee_name: String,
    },
}

impl ApiAction {
    /// Toast text shown when the action succeeds
    pub fn success_message(&self) -> String {
        match self {
            ApiAction::DeleteEmployee { name, .. } => format!("Employee {} deleted", name),
            ApiAction::UpdateLeaveStatus {
                employee_name,
                status,
                ..
            } => format!("{} for {}'s leave request!", status.label(), employee_name),
            ApiAction::DeleteAbsence { employee_name, .. } => {
                format!("Absence record for {} deleted", employee_name)
            }
        }
    }

    /// Toast text shown when the action fails with `error`
    pub fn failure_message(&self, error: &ApiError) -> String {
        match error {
            ApiError::Rejected(message) => message.clone(),
            other => {
                let what = match self {
                    ApiAction::DeleteEmployee { .. } => "Error deleting employee",
                    ApiAction::UpdateLeaveStatus { .. } => "Error updating leave status",
                    ApiAction::DeleteAbsence { .. } => "Error deleting absence record",
                };
                format!("{}: {}", what, other)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ApiRequest {
    Fetch {
        request_id: u64,
        target: FetchTarget,
    },
    Action {
        action: ApiAction,
    },
}

/// Loaded collection
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Employees(Vec<Employee>),
    Leaves(Vec<LeaveRequest>),
    Absences(Vec<AbsenceRecord>),
}

#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// Answer to `ApiRequest::Fetch` with the same `request_id`
    Loaded {
        request_id: u64,
        result: Result<Payload, ApiError>,
    },
    /// Answer to `ApiRequest::Action`
    ActionDone {
        action: ApiAction,
        result: Result<(), ApiError>,
    },
    /// The worker could not start or crashed
    WorkerFailed(String),
}

/// UI-side end of the worker channels
///
/// Hands out monotonically increasing request ids so tabs can recognize
/// (and drop) answers to fetches they have since superseded.
#[derive(Debug)]
pub struct ApiHandle {
    request_tx: Option<Sender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
    next_request_id: u64,
    cancel_token: CancellationToken,
}

impl ApiHandle {
    pub fn new(
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            next_request_id: 0,
            cancel_token,
        }
    }

    /// Handle with no worker behind it; every send fails
    pub fn disconnected() -> Self {
        Self {
            request_tx: None,
            response_rx: None,
            next_request_id: 0,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    /// Ask the worker for a collection. Returns the request id, or `None` if
    /// the worker is gone.
    pub fn fetch(&mut self, target: FetchTarget) -> Option<u64> {
        let tx = self.request_tx.as_ref()?;

        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request_id = self.next_request_id;

        match tx.send(ApiRequest::Fetch { request_id, target }) {
            Ok(()) => {
                log::debug!("Fetch {:?} sent as request {}", target, request_id);
                Some(request_id)
            }
            Err(_) => {
                log::error!("API worker disconnected");
                self.request_tx = None;
                None
            }
        }
    }

    /// Submit a mutation. Returns false if the worker is gone.
    pub fn submit(&mut self, action: ApiAction) -> bool {
        let Some(tx) = self.request_tx.as_ref() else {
            return false;
        };

        if tx.send(ApiRequest::Action { action }).is_err() {
            log::error!("API worker disconnected");
            self.request_tx = None;
            return false;
        }
        true
    }

    /// Next pending response, without blocking
    pub fn try_recv(&mut self) -> Option<ApiResponse> {
        let rx = self.response_rx.as_ref()?;

        match rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.response_rx = None;
                Some(ApiResponse::WorkerFailed(
                    "API worker disconnected".to_string(),
                ))
            }
        }
    }

    /// Abort in-flight requests and let the worker exit
    pub fn shutdown(&mut self) {
        self.cancel_token.cancel();
        self.request_tx = None;
    }
}
