//! Domain records
//!
//! These are the internal shapes every tab works with. Backend JSON never
//! reaches this module directly: `api::dto` maps wire records into these.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Role of an employee and of the signed-in session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Manager,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" => Some(Role::Employee),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub phone: String,
    pub monthly_salary: u64,
    pub profile_pic: Option<String>,
}

impl Employee {
    /// Case-insensitive match on name, role or email
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.role.label().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }
}

/// Approval state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(LeaveStatus::Pending),
            "Approved" => Some(LeaveStatus::Approved),
            "Rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
    pub leave_title: String,
    pub leave_type: String,
    pub reason: String,
    pub total_leave_days: u32,
    pub status: LeaveStatus,
    /// Who approved or rejected the request, when known
    pub marked_by_name: Option<String>,
}

impl LeaveRequest {
    /// Whether the request starts in the same month and year as `month`.
    ///
    /// Accepts a plain date or an ISO timestamp; anything unparseable is false.
    pub fn starts_in(&self, month: NaiveDate) -> bool {
        self.start_date
            .get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
            .is_some_and(|start| start.year() == month.year() && start.month() == month.month())
    }
}

/// A recorded absence for one employee on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceRecord {
    pub id: String,
    pub employee_name: String,
    pub date: String,
    pub absent_type: String,
    pub reason: String,
    pub marked_by_name: String,
}

impl AbsenceRecord {
    pub fn matches(&self, query: &str) -> bool {
        self.employee_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Identity of the person using the client
///
/// Supplied from outside (flags or config); the client does not log in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
