//! Tests for the API worker thread

use super::*;
use std::time::Duration;

use crate::model::LeaveStatus;
use crate::test_utils::test_helpers::CannedServer;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(5)).unwrap()
}

fn recv(handle: &mut ApiHandle) -> ApiResponse {
    let deadline = std::time::Instant::now() + RECV_TIMEOUT;
    loop {
        if let Some(response) = handle.try_recv() {
            return response;
        }
        assert!(
            std::time::Instant::now() < deadline,
            "no response from worker"
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_fetch_answered_with_same_request_id() {
    let server = CannedServer::single(200, r#"[{"_id":"e1","name":"Asha"}]"#);
    let mut handle = spawn_worker(client_for(&server.base_url));

    let request_id = handle.fetch(FetchTarget::Employees).unwrap();

    match recv(&mut handle) {
        ApiResponse::Loaded {
            request_id: got,
            result: Ok(Payload::Employees(employees)),
        } => {
            assert_eq!(got, request_id);
            assert_eq!(employees[0].name, "Asha");
        }
        other => panic!("Expected loaded employees, got {:?}", other),
    }
}

#[test]
fn test_requests_answered_in_order() {
    let server = CannedServer::start(vec![
        (200, "[]".to_string()),
        (200, r#"[{"_id":"l1","status":"Pending"}]"#.to_string()),
    ]);
    let mut handle = spawn_worker(client_for(&server.base_url));

    let first = handle.fetch(FetchTarget::Employees).unwrap();
    let second = handle.fetch(FetchTarget::PendingLeaves).unwrap();

    let ids: Vec<u64> = (0..2)
        .map(|_| match recv(&mut handle) {
            ApiResponse::Loaded { request_id, .. } => request_id,
            other => panic!("Expected loaded, got {:?}", other),
        })
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn test_action_result_carries_action() {
    let server = CannedServer::single(200, r#"{"success":true}"#);
    let mut handle = spawn_worker(client_for(&server.base_url));
    let action = ApiAction::UpdateLeaveStatus {
        leave_id: "l1".to_string(),
        employee_name: "Asha".to_string(),
        marked_by: "m1".to_string(),
        status: LeaveStatus::Approved,
    };

    assert!(handle.submit(action.clone()));

    match recv(&mut handle) {
        ApiResponse::ActionDone { action: got, result } => {
            assert_eq!(got, action);
            assert_eq!(result, Ok(()));
        }
        other => panic!("Expected action result, got {:?}", other),
    }
}

#[test]
fn test_network_failure_reported_as_error() {
    let mut handle = spawn_worker(client_for("http://127.0.0.1:1/api"));

    handle.fetch(FetchTarget::Employees).unwrap();

    match recv(&mut handle) {
        ApiResponse::Loaded { result, .. } => {
            assert!(matches!(result, Err(ApiError::Network(_))));
        }
        other => panic!("Expected loaded error, got {:?}", other),
    }
}

#[test]
fn test_cancelled_token_stops_processing() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let token = CancellationToken::new();
    token.cancel();

    request_tx
        .send(ApiRequest::Fetch {
            request_id: 1,
            target: FetchTarget::Employees,
        })
        .unwrap();
    drop(request_tx);

    crate::test_utils::test_helpers::run_async(worker_loop(
        client_for("http://127.0.0.1:1/api"),
        request_rx,
        response_tx,
        token,
    ));

    assert!(response_rx.try_recv().is_err());
}

#[test]
fn test_run_cancellable_prefers_cancellation() {
    let token = CancellationToken::new();
    token.cancel();

    let result: Result<(), ApiError> = crate::test_utils::test_helpers::run_async(
        run_cancellable(&token, std::future::pending()),
    );

    assert_eq!(result, Err(ApiError::Cancelled));
}
