//! Wire records and their mapping into domain records
//!
//! The backend is loosely typed: ids come as `_id`, salaries and day counts
//! arrive either as numbers or as strings, optional fields are sometimes
//! missing and sometimes empty. All of that is absorbed here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{AbsenceRecord, Employee, LeaveRequest, LeaveStatus, Role};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EmployeeDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub monthly_salary: Option<Value>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LeaveDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub leave_title: Option<String>,
    #[serde(default)]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub total_leave_days: Option<Value>,
    pub status: String,
    #[serde(default)]
    pub marked_by_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AbsenceDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub absent_type: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub marked_by_name: Option<String>,
}

/// Body of every mutating endpoint's answer
#[derive(Debug, Default, Deserialize)]
pub(super) struct ActionResponseDto {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What an action endpoint must answer for the action to count as done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Confirmation {
    /// Anything but an explicit `success: false`
    Lenient,
    /// Nothing but `success: true`
    Explicit,
}

impl Confirmation {
    /// Outcome of a 2xx reply with an empty body
    pub fn empty_body(self, fallback: &str) -> Result<(), String> {
        match self {
            Confirmation::Lenient => Ok(()),
            Confirmation::Explicit => Err(fallback.to_string()),
        }
    }
}

impl ActionResponseDto {
    pub fn into_result(self, confirmation: Confirmation, fallback: &str) -> Result<(), String> {
        let accepted = match confirmation {
            Confirmation::Lenient => self.success != Some(false),
            Confirmation::Explicit => self.success == Some(true),
        };
        if accepted {
            return Ok(());
        }
        Err(self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LeaveStatusUpdateDto<'a> {
    #[serde(rename = "leaveid")]
    pub leave_id: &'a str,
    pub marked_by: &'a str,
    pub status: &'a str,
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Leading-integer parse of a number or numeric string; anything else is 0.
///
/// `"45000"`, `45000`, `"45000.75"` and `" 45000 INR"` all give 45000.
pub(super) fn parse_leading_u64(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let digits: String = s
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

pub(super) fn map_employee(dto: EmployeeDto) -> Employee {
    let role = dto.role.as_deref().and_then(Role::parse).unwrap_or_else(|| {
        log::warn!("Employee {} has unknown role {:?}", dto.id, dto.role);
        Role::Employee
    });

    Employee {
        monthly_salary: parse_leading_u64(dto.monthly_salary.as_ref()),
        email: dto
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "-".to_string()),
        name: text(dto.name),
        phone: text(dto.phone),
        profile_pic: dto.profile_pic.filter(|p| !p.trim().is_empty()),
        role,
        id: dto.id,
    }
}

pub(super) fn map_leave(dto: LeaveDto) -> Result<LeaveRequest, String> {
    let status = LeaveStatus::parse(&dto.status)
        .ok_or_else(|| format!("leave {} has unknown status {:?}", dto.id, dto.status))?;

    Ok(LeaveRequest {
        total_leave_days: parse_leading_u64(dto.total_leave_days.as_ref())
            .try_into()
            .unwrap_or(u32::MAX),
        employee_name: text(dto.employee_name),
        start_date: text(dto.start_date),
        end_date: text(dto.end_date),
        leave_title: text(dto.leave_title),
        leave_type: text(dto.leave_type),
        reason: text(dto.reason),
        marked_by_name: dto.marked_by_name.filter(|m| !m.trim().is_empty()),
        status,
        id: dto.id,
    })
}

pub(super) fn map_absence(dto: AbsenceDto) -> AbsenceRecord {
    AbsenceRecord {
        employee_name: text(dto.employee_name),
        date: text(dto.date),
        absent_type: text(dto.absent_type),
        reason: text(dto.reason),
        marked_by_name: text(dto.marked_by_name),
        id: dto.id,
    }
}

/// Map a list of leave records, dropping (and logging) malformed entries
pub(super) fn map_leaves(dtos: Vec<LeaveDto>) -> Vec<LeaveRequest> {
    dtos.into_iter()
        .filter_map(|dto| match map_leave(dto) {
            Ok(leave) => Some(leave),
            Err(e) => {
                log::warn!("Skipping leave record: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "dto_tests.rs"]
mod dto_tests;
