use ratatui::{
    Frame,
    crossterm::event::KeyEvent,
    layout::{Constraint, Layout, Rect},
    widgets::Row,
};

use super::list_state::ListState;
use super::search_field::SearchField;
use super::table_render::{TableLayout, render_list};
use crate::api::{ApiAction, ApiError, ApiHandle, FetchTarget, Payload};
use crate::model::Employee;

const TABLE: TableLayout<'static> = TableLayout {
    title: "Employees",
    headers: &["#", "Name", "Role", "Email", "Phone", "Salary"],
    widths: &[
        Constraint::Length(5),
        Constraint::Percentage(22),
        Constraint::Length(9),
        Constraint::Percentage(30),
        Constraint::Length(13),
        Constraint::Length(10),
    ],
    empty_message: "No employees found.",
};

/// Employee directory with search and delete
pub struct EmployeesTab {
    pub list: ListState<Employee>,
    pub search: SearchField,
}

impl EmployeesTab {
    pub fn new(page_size: usize) -> Self {
        Self {
            list: ListState::new(page_size),
            search: SearchField::new("Search by name, role or email..."),
        }
    }

    pub fn reload(&mut self, api: &mut ApiHandle) {
        self.list.begin_load(api.fetch(FetchTarget::Employees));
    }

    /// Install a fetch result. Returns a message to surface on failure.
    pub fn on_loaded(&mut self, result: Result<Payload, ApiError>) -> Option<String> {
        match result {
            Ok(Payload::Employees(employees)) => {
                let query = self.search.query().to_string();
                self.list.finish_load(employees, |e| e.matches(&query));
                None
            }
            Ok(_) => {
                let message = "Unexpected payload for employees".to_string();
                self.list.fail_load(message.clone());
                Some(message)
            }
            Err(err) => {
                let message = super::load_error_message("employees", &err);
                self.list.fail_load(message.clone());
                Some(message)
            }
        }
    }

    /// Feed a key to the search field, refiltering when the query changed
    pub fn handle_search_key(&mut self, key: KeyEvent) {
        if self.search.handle_key(key) {
            self.apply_search();
        }
    }

    pub fn clear_search(&mut self) {
        if self.search.clear() {
            self.apply_search();
        }
    }

    fn apply_search(&mut self) {
        let query = self.search.query().to_string();
        self.list.apply_new_filter(|e| e.matches(&query));
    }

    /// Delete action for the selected row
    pub fn delete_selected(&self) -> Option<ApiAction> {
        self.list
            .selected_item()
            .map(|employee| ApiAction::DeleteEmployee {
                id: employee.id.clone(),
                name: employee.name.clone(),
            })
    }

    pub fn on_deleted(&mut self, id: &str) {
        let query = self.search.query().to_string();
        self.list.remove_where(|e| e.id == id, |e| e.matches(&query));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(4)]).areas(area);

        self.search.render(frame, search_area);
        render_list(frame, list_area, &TABLE, &self.list, |number, e| {
            Row::new(vec![
                number.to_string(),
                e.name.clone(),
                e.role.label().to_string(),
                e.email.clone(),
                e.phone.clone(),
                format!("₹{}", e.monthly_salary),
            ])
        });
    }
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod employees_tests;
