use crate::entities::Subject;
use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::components::list::{clamp_selection, next_index, previous_index, styled_list, subject_color};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListItem, ListState},
    Frame,
};

pub struct SubjectListScreen {
    list_state: ListState,
}

impl SubjectListScreen {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn subject_item(subject: &Subject) -> ListItem<'static> {
        let lines = vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(subject_color(&subject.color))),
                Span::styled(
                    subject.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {} · {}", subject.teacher, subject.schedule()),
                Style::default().fg(Color::Gray),
            )),
        ];
        ListItem::new(lines)
    }
}

impl Default for SubjectListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SubjectListScreen {
    fn handle_key_events(&mut self, key: KeyEvent, session: &Session) -> Action {
        let subjects = session.store().subjects();
        let rows = subjects.len() + 1;
        let selected = clamp_selection(self.selected(), rows);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state.select(Some(previous_index(selected)));
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state.select(Some(next_index(selected, rows)));
                Action::None
            }
            KeyCode::Enter => match subjects.get(selected) {
                Some(subject) => Action::OpenSubject(subject.id),
                None => Action::NewSubject,
            },
            KeyCode::Char('a') => Action::NewSubject,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, session: &Session) {
        let subjects = session.store().subjects();
        let mut items: Vec<ListItem> = subjects.iter().map(Self::subject_item).collect();
        items.push(ListItem::new(Span::styled("+ Add subject", Style::default().fg(Color::Cyan))));

        let selected = clamp_selection(self.selected(), subjects.len() + 1);
        self.list_state.select(Some(selected));

        f.render_stateful_widget(styled_list(items, " Subjects "), rect, &mut self.list_state);
    }

    fn key_hints(&self, _session: &Session) -> Vec<InstructionShortcut> {
        vec![shortcuts::ENTER_OPEN, shortcuts::ADD, shortcuts::TABS, shortcuts::HELP, shortcuts::QUIT]
    }
}
