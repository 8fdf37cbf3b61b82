use super::{field_line, section_line};
use crate::constants::{ITEM_REMOVED_PLACEHOLDER, NO_GRADES_PLACEHOLDER, NO_NOTES_PLACEHOLDER};
use crate::entities::Subject;
use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::components::list::subject_color;
use crate::ui::core::{Action, Component};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct SubjectDetailScreen {
    date_format: String,
}

impl SubjectDetailScreen {
    pub fn new(date_format: String) -> Self {
        Self { date_format }
    }

    fn subject_lines(&self, session: &Session, subject: &Subject) -> Vec<Line<'static>> {
        let notes = if subject.notes.is_empty() {
            NO_NOTES_PLACEHOLDER.to_string()
        } else {
            subject.notes.clone()
        };

        let mut lines = vec![
            Line::from(Span::styled(
                subject.name.clone(),
                Style::default()
                    .fg(subject_color(&subject.color))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            field_line("Teacher", subject.teacher.clone()),
            field_line("Schedule", subject.schedule()),
            field_line("Group", subject.group.clone()),
            field_line("Notes", notes),
            Line::default(),
            section_line("Grades"),
        ];

        if subject.grades.is_empty() {
            lines.push(Line::from(Span::styled(
                NO_GRADES_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.extend(
                subject
                    .grades
                    .iter()
                    .map(|grade| field_line(&grade.name, grade.display_score())),
            );
        }

        let events: Vec<_> = session
            .store()
            .events()
            .iter()
            .filter(|event| event.subject_id == Some(subject.id))
            .collect();
        if !events.is_empty() {
            lines.push(Line::default());
            lines.push(section_line("Events"));
            lines.extend(events.iter().map(|event| {
                field_line(
                    &datetime::format_optional(event.date, &self.date_format),
                    format!("{} ({})", event.title, event.kind),
                )
            }));
        }

        lines
    }
}

impl Component for SubjectDetailScreen {
    fn handle_key_events(&mut self, key: KeyEvent, session: &Session) -> Action {
        match key.code {
            KeyCode::Char('e') if session.selected_subject().is_some() => Action::EditSubject,
            KeyCode::Backspace => Action::Back,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, session: &Session) {
        let lines = match session.selected_subject() {
            Some(subject) => self.subject_lines(session, subject),
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

    fn key_hints(&self, _session: &Session) -> Vec<InstructionShortcut> {
        vec![shortcuts::EDIT, shortcuts::ESC_BACK, shortcuts::HELP]
    }
}
