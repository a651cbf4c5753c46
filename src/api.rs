//! REST backend collaborator
//!
//! The `ApiClient` talks JSON over HTTPS to the WorkNest backend. Wire shapes
//! stay inside `dto`; everything leaving this module is a `crate::model`
//! record. The worker thread runs the client off the UI thread and answers
//! over channels.

mod client;
mod dto;
mod messages;
pub mod worker;

use thiserror::Error;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use messages::{ApiAction, ApiHandle, ApiRequest, ApiResponse, FetchTarget, Payload};

/// Errors that can occur while talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success HTTP status
    #[error("Server returned {code} for {endpoint}")]
    Status { endpoint: String, code: u16 },

    /// Response body did not have the expected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Backend accepted the request but reported `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Request was cancelled before it completed
    #[error("Request cancelled")]
    Cancelled,
}
