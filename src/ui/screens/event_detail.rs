use super::field_line;
use crate::constants::{ITEM_REMOVED_PLACEHOLDER, NO_NOTES_PLACEHOLDER, NO_SUBJECT_PLACEHOLDER};
use crate::entities::{Event, EventKind};
use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::core::{Action, Component, DialogType};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct EventDetailScreen {
    date_format: String,
}

impl EventDetailScreen {
    pub fn new(date_format: String) -> Self {
        Self { date_format }
    }

    fn status_line(event: &Event) -> Line<'static> {
        match event.kind {
            EventKind::Class => {
                let status = match event.attendance {
                    Some(true) => "Attended",
                    Some(false) => "Absent",
                    None => "Not recorded",
                };
                field_line("Attendance", status)
            }
            EventKind::Assignment => {
                let grade = event
                    .grade
                    .map(|score| score.to_string())
                    .unwrap_or_else(|| "Not graded".to_string());
                field_line("Grade", grade)
            }
            EventKind::Other => field_line("Status", if event.completed { "Submitted" } else { "Pending" }),
        }
    }

    /// Formatted date followed by how far it is from today
    fn date_label(&self, session: &Session, event: &Event) -> String {
        let formatted = datetime::format_optional(event.date, &self.date_format);
        match event.date {
            Some(date) => format!("{} ({})", formatted, datetime::format_relative_date(date, session.today())),
            None => formatted,
        }
    }

    fn event_lines(&self, session: &Session, event: &Event) -> Vec<Line<'static>> {
        let time = if event.start_time.is_empty() {
            "-".to_string()
        } else {
            format!("{} - {}", event.start_time, event.end_time)
        };
        let subject = session
            .store()
            .subject_label_for(event)
            .unwrap_or_else(|| NO_SUBJECT_PLACEHOLDER.to_string());
        let notes = if event.notes.is_empty() {
            NO_NOTES_PLACEHOLDER.to_string()
        } else {
            event.notes.clone()
        };

        vec![
            Line::from(Span::styled(
                event.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            field_line("Type", event.kind.to_string()),
            field_line("Date", self.date_label(session, event)),
            field_line("Time", time),
            field_line("Subject", subject),
            field_line("Notes", notes),
            Line::default(),
            Self::status_line(event),
        ]
    }
}

impl Component for EventDetailScreen {
    fn handle_key_events(&mut self, key: KeyEvent, session: &Session) -> Action {
        let Some(event) = session.selected_event() else {
            return match key.code {
                KeyCode::Backspace => Action::Back,
                _ => Action::None,
            };
        };

        match (key.code, event.kind) {
            (KeyCode::Char('e'), _) => Action::EditEvent,
            (KeyCode::Char('g'), EventKind::Assignment) => Action::ShowDialog(DialogType::RecordGrade {
                event_id: event.id,
                current: event.grade.map(|score| score.to_string()).unwrap_or_default(),
            }),
            (KeyCode::Char('t'), EventKind::Class) => Action::ShowDialog(DialogType::RecordAttendance {
                event_id: event.id,
                attended: event.attendance.unwrap_or(false),
            }),
            (KeyCode::Char('m'), EventKind::Other) => Action::ToggleCompleted(event.id),
            (KeyCode::Backspace, _) => Action::Back,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, session: &Session) {
        let lines = match session.selected_event() {
            Some(event) => self.event_lines(session, event),
            None => vec![Line::from(Span::styled(
                ITEM_REMOVED_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, rect);
    }

    fn key_hints(&self, session: &Session) -> Vec<InstructionShortcut> {
        let mut hints = vec![shortcuts::EDIT];
        match session.selected_event().map(|event| event.kind) {
            Some(EventKind::Class) => hints.push(("t", Color::Cyan, " Attendance")),
            Some(EventKind::Assignment) => hints.push(("g", Color::Cyan, " Grade")),
            Some(EventKind::Other) => hints.push(("m", Color::Cyan, " Mark submitted")),
            None => hints.clear(),
        }
        hints.push(shortcuts::ESC_BACK);
        hints
    }
}
