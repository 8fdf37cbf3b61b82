use super::{field_line, section_line};
use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct ProfileScreen;

impl ProfileScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProfileScreen {
    fn handle_key_events(&mut self, key: KeyEvent, _session: &Session) -> Action {
        match key.code {
            KeyCode::Char('p') => Action::OpenChangePassword,
            KeyCode::Char('l') => Action::Logout,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, session: &Session) {
        let user = session.user();
        let store = session.store();
        let graded = store.events().iter().filter(|event| event.grade.is_some()).count();

        let lines = vec![
            Line::from(Span::styled("👤", Style::default().fg(Color::Cyan))),
            Line::from(Span::styled(
                user.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(user.handle.clone(), Style::default().fg(Color::Gray))),
            Line::default(),
            section_line("Summary"),
            field_line("Subjects", store.subjects().len().to_string()),
            field_line("Events", store.events().len().to_string()),
            field_line("Graded", graded.to_string()),
            Line::default(),
            section_line("Account"),
            Line::from(vec![
                Span::styled("p", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw("  Change password"),
            ]),
            Line::from(vec![
                Span::styled("l", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw("  Log out"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(paragraph, rect);
    }

    fn key_hints(&self, _session: &Session) -> Vec<InstructionShortcut> {
        vec![
            ("p", Color::Cyan, " Change password"),
            ("l", Color::Red, " Log out"),
            shortcuts::TABS,
            shortcuts::QUIT,
        ]
    }
}
