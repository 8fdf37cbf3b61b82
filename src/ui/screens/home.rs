//! Today's agenda

use crate::constants::NO_EVENTS_TODAY;
use crate::entities::{EntityId, Event, EventKind};
use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::components::list::{clamp_selection, next_index, previous_index, styled_list, subject_color};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListItem, ListState, Paragraph},
    Frame,
};

pub struct HomeScreen {
    list_state: ListState,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Ids of today's events in display order
    fn today_ids(session: &Session) -> Vec<EntityId> {
        session.store().events_on(session.today()).iter().map(|event| event.id).collect()
    }

    fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn event_item(session: &Session, event: &Event) -> ListItem<'static> {
        let time = if event.start_time.is_empty() {
            "     ".to_string()
        } else {
            event.start_time.clone()
        };
        let kind_icon = match event.kind {
            EventKind::Class => "📚",
            EventKind::Assignment => "📝",
            EventKind::Other => "📌",
        };
        let title_style = if event.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(format!("{} ", time), Style::default().fg(Color::Gray)),
            Span::raw(format!("{} ", kind_icon)),
            Span::styled(event.title.clone(), title_style),
        ];
        if let Some(label) = session.store().subject_label_for(event) {
            let color = session
                .store()
                .subject_of(event)
                .map(|subject| subject_color(&subject.color))
                .unwrap_or(Color::DarkGray);
            spans.push(Span::styled(format!("  {}", label), Style::default().fg(color)));
        }
        ListItem::new(Line::from(spans))
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HomeScreen {
    fn handle_key_events(&mut self, key: KeyEvent, session: &Session) -> Action {
        let ids = Self::today_ids(session);
        // The last row is the quick-add entry
        let rows = ids.len() + 1;
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
            KeyCode::Enter => match ids.get(selected) {
                Some(id) => Action::OpenEvent(*id),
                None => Action::NewEvent,
            },
            KeyCode::Char('a') => Action::NewEvent,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(rect);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Hello, {} 👋", session.user().first_name()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                session.today().format("%A, %B %-d").to_string(),
                Style::default().fg(Color::Gray),
            )),
        ]);
        f.render_widget(greeting, chunks[0]);

        let events = session.store().events_on(session.today());
        let mut items: Vec<ListItem> = if events.is_empty() {
            vec![ListItem::new(Span::styled(NO_EVENTS_TODAY, Style::default().fg(Color::DarkGray)))]
        } else {
            events.iter().map(|event| Self::event_item(session, event)).collect()
        };
        items.push(ListItem::new(Span::styled("+ Add event", Style::default().fg(Color::Cyan))));

        // With no events the placeholder row is not selectable; map the
        // cursor onto the add row instead.
        let rows = events.len() + 1;
        let selected = clamp_selection(self.selected(), rows);
        self.list_state.select(Some(selected));
        let mut render_state = self.list_state.clone();
        if events.is_empty() {
            render_state.select(Some(1));
        }

        f.render_stateful_widget(styled_list(items, " Today "), chunks[1], &mut render_state);
    }

    fn key_hints(&self, _session: &Session) -> Vec<InstructionShortcut> {
        vec![shortcuts::ENTER_OPEN, shortcuts::ADD, shortcuts::TABS, shortcuts::HELP, shortcuts::QUIT]
    }
}
