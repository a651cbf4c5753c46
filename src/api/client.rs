//! Async WorkNest API client
//!
//! Uses reqwest for HTTP. Each public method hits one endpoint and returns
//! domain records.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ApiError;
use super::dto::{
    AbsenceDto, ActionResponseDto, Confirmation, EmployeeDto, LeaveDto, LeaveStatusUpdateDto,
    map_absence, map_employee, map_leaves,
};
use crate::model::{AbsenceRecord, Employee, LeaveRequest, LeaveStatus};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://worknestbackend.onrender.com/api";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

fn date_segment(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl ApiClient {
    /// Create a client for `base_url` with a per-request `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path, with exactly one `/` between parts
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn check_status(path: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Action endpoints report their reason in the body even on 4xx
        if let Ok(body) = response.json::<ActionResponseDto>().await
            && body.success == Some(false)
            && let Some(message) = body.message.filter(|m| !m.trim().is_empty())
        {
            return Err(ApiError::Rejected(message));
        }

        Err(ApiError::Status {
            endpoint: path.to_string(),
            code: status.as_u16(),
        })
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", path);

        let response = self
            .client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check_status(path, response).await?;
        Self::decode(path, response).await
    }

    async fn put_action<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        confirmation: Confirmation,
        fallback: &str,
    ) -> Result<(), ApiError> {
        log::debug!("PUT {}", path);

        let mut request = self.client.put(self.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(path, response).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return confirmation.empty_body(fallback).map_err(ApiError::Rejected);
        }

        let outcome: ActionResponseDto =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        outcome.into_result(confirmation, fallback).map_err(ApiError::Rejected)
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let dtos: Vec<EmployeeDto> = self.get_json("employees").await?;
        Ok(dtos.into_iter().map(map_employee).collect())
    }

    /// Soft-delete an employee
    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        self.put_action::<()>(
            &format!("employees/delete/{}", id),
            None,
            Confirmation::Lenient,
            "Failed to delete employee.",
        )
        .await
    }

    pub async fn pending_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let dtos: Vec<LeaveDto> = self.get_json("leaves/getpendingleaverequest").await?;
        Ok(map_leaves(dtos))
    }

    /// Leave requests overlapping the month containing `date`
    pub async fn monthly_leaves(&self, date: NaiveDate) -> Result<Vec<LeaveRequest>, ApiError> {
        let path = format!("leaves/getmonthlyleaverequest/{}", date_segment(date));
        let dtos: Vec<LeaveDto> = self.get_json(&path).await?;
        Ok(map_leaves(dtos))
    }

    pub async fn update_leave_status(
        &self,
        leave_id: &str,
        marked_by: &str,
        status: LeaveStatus,
    ) -> Result<(), ApiError> {
        let body = LeaveStatusUpdateDto {
            leave_id,
            marked_by,
            status: status.label(),
        };
        self.put_action(
            "leaves/updateleavestatus",
            Some(&body),
            Confirmation::Explicit,
            "Something went wrong while updating status.",
        )
        .await
    }

    /// Absences recorded in the month containing `date`
    pub async fn monthly_absences(&self, date: NaiveDate) -> Result<Vec<AbsenceRecord>, ApiError> {
        let path = format!("attendance/getabsenteesforthismonth/{}", date_segment(date));
        let dtos: Vec<AbsenceDto> = self.get_json(&path).await?;
        Ok(dtos.into_iter().map(map_absence).collect())
    }

    pub async fn delete_absence(&self, id: &str) -> Result<(), ApiError> {
        self.put_action::<()>(
            &format!("attendance/deleteabsentrecord/{}", id),
            None,
            Confirmation::Lenient,
            "Failed to delete absence record.",
        )
        .await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
