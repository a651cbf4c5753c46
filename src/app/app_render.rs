use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::{App, PendingConfirm};
use crate::notification::render_notifications;
use crate::tabs::TabKind;
use crate::theme;
use crate::widgets::popup;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [tabs_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_tab_bar(frame, tabs_area);

        match self.active_tab {
            TabKind::Employees => self.employees.render(frame, body_area),
            TabKind::LeaveApprovals => self.leave_approvals.render(frame, body_area),
            TabKind::MonthlyLeaves => self.monthly_leaves.render(frame, body_area),
            TabKind::Absences => self.absences.render(frame, body_area),
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        if let Some(confirm) = &self.confirm {
            render_confirm(frame, confirm);
        }

        if self.help_visible {
            crate::help::help_popup_render::render_popup(frame);
        }

        // Toasts stay on top of every other layer
        render_notifications(frame, &self.notifications);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for tab in TabKind::ALL {
            let label = format!("{}:{}", tab.index() + 1, tab.title());
            if tab == self.active_tab {
                spans.push(Span::styled(format!("[{}]", label), theme::tabs::ACTIVE));
            } else {
                spans.push(Span::styled(format!(" {} ", label), theme::tabs::INACTIVE));
            }
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        let session = format!(
            "{} {} ",
            self.session.role.label(),
            if self.session.user_id.is_empty() {
                "(anonymous)"
            } else {
                self.session.user_id.as_str()
            }
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                session,
                Style::default().fg(theme::tabs::SESSION),
            ))
            .right_aligned(),
            area,
        );
    }
}

fn render_confirm(frame: &mut Frame, confirm: &PendingConfirm) {
    let frame_area = frame.area();
    let width = (confirm.prompt.chars().count() as u16 + 6)
        .max(30)
        .min(frame_area.width.saturating_sub(2));
    let area = popup::centered_popup(frame_area, width, 5);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .border_style(Style::default().fg(theme::dialog::BORDER))
        .style(Style::default().bg(theme::dialog::BACKGROUND));

    let lines = vec![
        Line::from(Span::styled(
            confirm.prompt.clone(),
            Style::default().fg(theme::dialog::TEXT),
        )),
        Line::from(vec![
            Span::styled("y", theme::dialog::KEY),
            Span::raw(" delete   "),
            Span::styled("n", theme::dialog::KEY),
            Span::raw(" cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .centered()
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
