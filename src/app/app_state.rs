use chrono::NaiveDate;

use crate::api::{ApiAction, ApiHandle};
use crate::model::Session;
use crate::notification::NotificationStore;
use crate::tabs::{AbsencesTab, EmployeesTab, LeaveApprovalsTab, MonthlyLeavesTab, TabKind};

/// A destructive action waiting for y/n
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub prompt: String,
    pub action: ApiAction,
}

pub struct App {
    pub session: Session,
    pub active_tab: TabKind,
    pub employees: EmployeesTab,
    pub leave_approvals: LeaveApprovalsTab,
    pub monthly_leaves: MonthlyLeavesTab,
    pub absences: AbsencesTab,
    pub notifications: NotificationStore,
    pub api: ApiHandle,
    pub confirm: Option<PendingConfirm>,
    pub help_visible: bool,
    pub should_quit: bool,
}

impl App {
    /// `today` picks the month the monthly tabs open on
    pub fn new(
        session: Session,
        page_size: usize,
        today: NaiveDate,
        api: ApiHandle,
        notifications: NotificationStore,
    ) -> Self {
        Self {
            session,
            active_tab: TabKind::default(),
            employees: EmployeesTab::new(page_size),
            leave_approvals: LeaveApprovalsTab::new(page_size),
            monthly_leaves: MonthlyLeavesTab::new(page_size, today),
            absences: AbsencesTab::new(page_size, today),
            notifications,
            api,
            confirm: None,
            help_visible: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Switch tabs, loading the new tab on first visit
    pub fn activate_tab(&mut self, tab: TabKind) {
        self.active_tab = tab;
        if self.active_tab_is_idle() {
            self.reload_active();
        }
    }

    fn active_tab_is_idle(&self) -> bool {
        match self.active_tab {
            TabKind::Employees => self.employees.list.is_idle(),
            TabKind::LeaveApprovals => self.leave_approvals.list.is_idle(),
            TabKind::MonthlyLeaves => self.monthly_leaves.list.is_idle(),
            TabKind::Absences => self.absences.list.is_idle(),
        }
    }

    pub fn reload_active(&mut self) {
        match self.active_tab {
            TabKind::Employees => self.employees.reload(&mut self.api),
            TabKind::LeaveApprovals => self.leave_approvals.reload(&mut self.api),
            TabKind::MonthlyLeaves => self.monthly_leaves.reload(&mut self.api),
            TabKind::Absences => self.absences.reload(&mut self.api),
        }
    }

    /// Whether the active tab's search field is taking keystrokes
    pub fn search_active(&self) -> bool {
        match self.active_tab {
            TabKind::Employees => self.employees.search.is_active(),
            TabKind::Absences => self.absences.search.is_active(),
            TabKind::LeaveApprovals | TabKind::MonthlyLeaves => false,
        }
    }

    /// Toast an error and return false unless the session is a manager
    pub(super) fn require_manager(&self, what: &str) -> bool {
        if self.session.is_manager() {
            return true;
        }
        log::debug!("Refused '{}' for role {}", what, self.session.role.label());
        self.notifications
            .error(format!("Only managers can {}", what));
        false
    }

    pub(super) fn submit(&mut self, action: ApiAction) {
        log::debug!("Submitting {:?}", action);
        if !self.api.submit(action) {
            self.notifications.error("Not connected to the server");
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
