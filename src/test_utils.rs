//! Shared test utilities for worknest
//!
//! This module provides common fixtures and a tiny canned HTTP server used
//! across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};
    use tokio_util::sync::CancellationToken;

    use chrono::NaiveDate;

    use crate::api::{ApiHandle, ApiRequest, ApiResponse};
    use crate::app::App;
    use crate::notification::NotificationStore;
    use crate::model::{AbsenceRecord, Employee, LeaveRequest, LeaveStatus, Role, Session};

    /// Helper to run async tests with a tokio runtime
    pub fn run_async<F: std::future::Future>(f: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(f)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn manager_session() -> Session {
        Session {
            user_id: "67fb84a2d36008a148091432".to_string(),
            role: Role::Manager,
        }
    }

    pub fn employee_session() -> Session {
        Session {
            user_id: "emp-1".to_string(),
            role: Role::Employee,
        }
    }

    pub fn sample_employee(i: usize) -> Employee {
        Employee {
            id: format!("emp-{}", i),
            name: format!("Employee {}", i),
            role: if i % 4 == 0 {
                Role::Manager
            } else {
                Role::Employee
            },
            email: format!("employee{}@worknest.io", i),
            phone: format!("98765{:05}", i),
            monthly_salary: 30_000 + i as u64 * 1_000,
            profile_pic: None,
        }
    }

    pub fn sample_employees(count: usize) -> Vec<Employee> {
        (1..=count).map(sample_employee).collect()
    }

    pub fn sample_leave(i: usize, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: format!("leave-{}", i),
            employee_name: format!("Employee {}", i),
            start_date: "2025-04-10".to_string(),
            end_date: "2025-04-11".to_string(),
            leave_title: format!("Leave {}", i),
            leave_type: "Casual".to_string(),
            reason: "Personal".to_string(),
            total_leave_days: 2,
            status,
            marked_by_name: None,
        }
    }

    pub fn sample_absence(i: usize) -> AbsenceRecord {
        AbsenceRecord {
            id: format!("abs-{}", i),
            employee_name: format!("Employee {}", i),
            date: "2025-04-02".to_string(),
            absent_type: "Full Day".to_string(),
            reason: "Sick".to_string(),
            marked_by_name: "Manager".to_string(),
        }
    }

    /// ApiHandle wired to plain channels instead of a worker thread
    pub struct TestApi {
        pub handle: ApiHandle,
        pub requests: Receiver<ApiRequest>,
        pub responses: Sender<ApiResponse>,
    }

    pub fn test_api() -> TestApi {
        let (request_tx, requests) = mpsc::channel();
        let (responses, response_rx) = mpsc::channel();
        TestApi {
            handle: ApiHandle::new(request_tx, response_rx, CancellationToken::new()),
            requests,
            responses,
        }
    }

    /// App wired to test channels, opened on April 2025
    pub struct TestApp {
        pub app: App,
        pub requests: Receiver<ApiRequest>,
        pub responses: Sender<ApiResponse>,
    }

    pub fn test_app(session: Session) -> TestApp {
        let api = test_api();
        let today = NaiveDate::from_ymd_opt(2025, 4, 17).unwrap();
        TestApp {
            app: App::new(session, 5, today, api.handle, NotificationStore::new()),
            requests: api.requests,
            responses: api.responses,
        }
    }

    /// Every request sent so far
    pub fn drain_requests(requests: &Receiver<ApiRequest>) -> Vec<ApiRequest> {
        requests.try_iter().collect()
    }

    /// Create a test terminal with specified dimensions
    pub fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    /// How long [`CannedServer`] waits on a stalled client before answering anyway
    const READ_TIMEOUT: Duration = Duration::from_secs(1);

    /// A request as seen by [`CannedServer`]
    #[derive(Debug, Clone)]
    pub struct CapturedRequest {
        pub method: String,
        pub path: String,
        pub body: String,
    }

    /// Local HTTP server answering a fixed sequence of responses, one per
    /// connection, then exiting.
    pub struct CannedServer {
        pub base_url: String,
        requests: Receiver<CapturedRequest>,
    }

    impl CannedServer {
        /// Serve `responses` as `(status, json body)` pairs, in order
        pub fn start(responses: Vec<(u16, String)>) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            let (tx, rx) = mpsc::channel();

            std::thread::spawn(move || {
                for (status, body) in responses {
                    let Ok((mut stream, _)) = listener.accept() else {
                        return;
                    };
                    let _ = stream.set_read_timeout(Some(READ_TIMEOUT));
                    let request = read_request(&mut stream);
                    let reason = if status < 400 { "OK" } else { "Error" };
                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.flush();
                    let _ = tx.send(request);
                }
            });

            Self {
                base_url: format!("http://{}/api", addr),
                requests: rx,
            }
        }

        pub fn single(status: u16, body: &str) -> Self {
            Self::start(vec![(status, body.to_string())])
        }

        /// Next request the server answered
        pub fn next_request(&self) -> CapturedRequest {
            self.requests
                .recv_timeout(Duration::from_secs(5))
                .expect("server saw no request")
        }
    }

    fn read_request(stream: &mut TcpStream) -> CapturedRequest {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            if let Some(pos) = find_header_end(&buffer) {
                break pos;
            }
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break buffer.len(),
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let body_start = (header_end + 4).min(buffer.len());
        while buffer.len() < body_start + content_length {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            }
        }

        let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
        CapturedRequest {
            method: request_line.next().unwrap_or_default().to_string(),
            path: request_line.next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buffer[body_start..]).to_string(),
        }
    }

    fn find_header_end(buffer: &[u8]) -> Option<usize> {
        buffer.windows(4).position(|w| w == b"\r\n\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::CannedServer;
    use std::io::{Read, Write};
    use std::net::TcpStream;

    #[test]
    fn test_canned_server_answers_stalled_client() {
        let server = CannedServer::single(200, r#"{"success":true}"#);
        let addr = server
            .base_url
            .trim_start_matches("http://")
            .trim_end_matches("/api")
            .to_string();

        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(b"PUT /api/stalled HTTP/1.1\r\n").unwrap();

        let request = server.next_request();
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/api/stalled");

        let mut reply = String::new();
        stream.read_to_string(&mut reply).unwrap();
        assert!(reply.starts_with("HTTP/1.1 200"));
    }
}
