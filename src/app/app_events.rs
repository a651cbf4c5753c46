use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, PendingConfirm};
use crate::api::ApiResponse;
use crate::model::LeaveStatus;
use crate::tabs::{ListState, TabKind};

mod api_responses;
mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_api();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event);
            }
        }
        Ok(())
    }

    /// Drain every response the worker has ready
    pub fn poll_api(&mut self) {
        while let Some(response) = self.api.try_recv() {
            self.handle_api_response(response);
        }
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        api_responses::handle_response(self, response);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        if self.search_active() {
            self.handle_search_key(key);
            return;
        }

        if global::handle_global_keys(self, key) {
            return;
        }

        if self.handle_navigation_key(key) {
            return;
        }

        self.handle_tab_key(key);
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(confirm) = self.confirm.take() {
                    self.submit(confirm.action);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm = None;
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match self.active_tab {
            TabKind::Employees => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.employees.search.deactivate(),
                KeyCode::Char('u') if ctrl => self.employees.clear_search(),
                _ => self.employees.handle_search_key(key),
            },
            TabKind::Absences => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.absences.search.deactivate(),
                KeyCode::Char('u') if ctrl => self.absences.clear_search(),
                _ => self.absences.handle_search_key(key),
            },
            TabKind::LeaveApprovals | TabKind::MonthlyLeaves => {}
        }
    }

    /// Row selection and paging, shared by every tab
    fn handle_navigation_key(&mut self, key: KeyEvent) -> bool {
        match self.active_tab {
            TabKind::Employees => navigate(&mut self.employees.list, key),
            TabKind::LeaveApprovals => navigate(&mut self.leave_approvals.list, key),
            TabKind::MonthlyLeaves => navigate(&mut self.monthly_leaves.list, key),
            TabKind::Absences => navigate(&mut self.absences.list, key),
        }
    }

    fn handle_tab_key(&mut self, key: KeyEvent) {
        match (self.active_tab, key.code) {
            (TabKind::Employees, KeyCode::Char('/')) => self.employees.search.activate(),
            (TabKind::Absences, KeyCode::Char('/')) => self.absences.search.activate(),
            (TabKind::Employees, KeyCode::Char('d')) => self.confirm_delete_employee(),
            (TabKind::Absences, KeyCode::Char('d')) => self.confirm_delete_absence(),
            (TabKind::LeaveApprovals, KeyCode::Char('a')) => {
                self.decide_leave(LeaveStatus::Approved)
            }
            (TabKind::LeaveApprovals, KeyCode::Char('x')) => {
                self.decide_leave(LeaveStatus::Rejected)
            }
            (TabKind::MonthlyLeaves, KeyCode::Char('f')) => self.monthly_leaves.cycle_filter(),
            (TabKind::MonthlyLeaves, KeyCode::Char('[')) => {
                self.monthly_leaves.change_month(-1, &mut self.api)
            }
            (TabKind::MonthlyLeaves, KeyCode::Char(']')) => {
                self.monthly_leaves.change_month(1, &mut self.api)
            }
            (TabKind::Absences, KeyCode::Char('[')) => {
                self.absences.change_month(-1, &mut self.api)
            }
            (TabKind::Absences, KeyCode::Char(']')) => self.absences.change_month(1, &mut self.api),
            _ => {}
        }
    }

    fn confirm_delete_employee(&mut self) {
        if !self.require_manager("delete employees") {
            return;
        }
        let Some(employee) = self.employees.list.selected_item() else {
            return;
        };
        let prompt = format!("Delete employee {}?", employee.name);
        if let Some(action) = self.employees.delete_selected() {
            self.confirm = Some(PendingConfirm { prompt, action });
        }
    }

    fn confirm_delete_absence(&mut self) {
        if !self.require_manager("delete absence records") {
            return;
        }
        let Some(record) = self.absences.list.selected_item() else {
            return;
        };
        let prompt = format!(
            "Delete absence of {} on {}?",
            record.employee_name, record.date
        );
        if let Some(action) = self.absences.delete_selected() {
            self.confirm = Some(PendingConfirm { prompt, action });
        }
    }

    fn decide_leave(&mut self, status: LeaveStatus) {
        if !self.require_manager("approve or reject leave requests") {
            return;
        }
        match self
            .leave_approvals
            .decide_selected(&self.session.user_id, status)
        {
            Ok(action) => self.submit(action),
            Err(reason) => {
                self.notifications.error(reason);
            }
        }
    }
}

fn navigate<T>(list: &mut ListState<T>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => list.select_next(),
        KeyCode::Up | KeyCode::Char('k') => list.select_prev(),
        KeyCode::Right | KeyCode::Char('l') => {
            list.next_page();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            list.prev_page();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            list.first_page();
        }
        KeyCode::End | KeyCode::Char('G') => {
            list.last_page();
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
