//! API Worker Thread
//!
//! Runs every backend call in a background thread so the UI never blocks on
//! the network. Receives requests via channel, makes the HTTP call, and sends
//! the mapped result back to the main thread.
//!
//! Requests are handled one at a time on a single-threaded tokio runtime. A
//! shared `CancellationToken` aborts the in-flight call on shutdown.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::messages::{ApiAction, ApiHandle, ApiRequest, ApiResponse, FetchTarget, Payload};
use super::{ApiClient, ApiError};

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Spawn the worker thread and return the UI-side handle
pub fn spawn_worker(client: ApiClient) -> ApiHandle {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let worker_token = cancel_token.clone();

    std::thread::spawn(move || {
        let failure_tx = response_tx.clone();

        // A panic inside the worker must not print over the TUI
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create tokio runtime: {}", e);
                    let _ = response_tx.send(ApiResponse::WorkerFailed(format!(
                        "Failed to start network worker: {}",
                        e
                    )));
                    return;
                }
            };

            rt.block_on(worker_loop(client, request_rx, response_tx, worker_token));
        }));

        if let Err(e) = result {
            let msg = panic_message(e.as_ref());
            log::error!("API worker thread panicked: {}", msg);
            let _ = failure_tx.send(ApiResponse::WorkerFailed(format!(
                "Network worker crashed: {}",
                msg
            )));
        }
    });

    ApiHandle::new(request_tx, response_rx, cancel_token)
}

/// Main worker loop - processes requests until the channel is closed or the
/// token is cancelled
///
/// Uses blocking `recv()` on the request channel (fine in dedicated thread).
pub(crate) async fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
    cancel_token: CancellationToken,
) {
    while let Ok(request) = request_rx.recv() {
        if cancel_token.is_cancelled() {
            break;
        }

        let response = match request {
            ApiRequest::Fetch { request_id, target } => ApiResponse::Loaded {
                request_id,
                result: run_cancellable(&cancel_token, fetch(&client, target)).await,
            },
            ApiRequest::Action { action } => {
                let result = run_cancellable(&cancel_token, perform(&client, &action)).await;
                ApiResponse::ActionDone { action, result }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread is gone
            break;
        }
    }

    log::debug!("API worker loop finished");
}

async fn run_cancellable<T>(
    cancel_token: &CancellationToken,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::select! {
        biased;

        _ = cancel_token.cancelled() => Err(ApiError::Cancelled),
        result = call => result,
    }
}

async fn fetch(client: &ApiClient, target: FetchTarget) -> Result<Payload, ApiError> {
    match target {
        FetchTarget::Employees => client.list_employees().await.map(Payload::Employees),
        FetchTarget::PendingLeaves => client.pending_leaves().await.map(Payload::Leaves),
        FetchTarget::MonthlyLeaves(date) => client.monthly_leaves(date).await.map(Payload::Leaves),
        FetchTarget::Absences(date) => client.monthly_absences(date).await.map(Payload::Absences),
    }
}

async fn perform(client: &ApiClient, action: &ApiAction) -> Result<(), ApiError> {
    match action {
        ApiAction::DeleteEmployee { id, .. } => client.delete_employee(id).await,
        ApiAction::UpdateLeaveStatus {
            leave_id,
            marked_by,
            status,
            ..
        } => client.update_leave_status(leave_id, marked_by, *status).await,
        ApiAction::DeleteAbsence { id, .. } => client.delete_absence(id).await,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
