//! Add/edit event form

use crate::constants::{NO_SUBJECT_PLACEHOLDER, SUBJECT_REMOVED_PLACEHOLDER};
use crate::entities::{EntityId, EventDraft};
use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::components::{FormEvent, FormField, FormState};
use crate::ui::core::{Action, Component};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Color,
    widgets::{Block, BorderType, Borders},
    Frame,
};

const TITLE: usize = 0;
const DATE: usize = 1;
const SUBJECT: usize = 2;
const NOTES: usize = 3;

pub struct EventFormScreen {
    form: FormState,
    /// Subject id behind each option of the subject field, as text.
    /// The "no subject" option is empty.
    subject_values: Vec<String>,
    /// Deleted subject the edited event still points at
    removed_subject: Option<EntityId>,
}

impl EventFormScreen {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            subject_values: vec![String::new()],
            removed_subject: None,
        }
    }

    fn load(&mut self, session: &Session, draft: EventDraft) {
        let store = session.store();
        let mut options = vec![NO_SUBJECT_PLACEHOLDER.to_string()];
        self.subject_values = vec![String::new()];
        for subject in store.subjects() {
            options.push(subject.name.clone());
            self.subject_values.push(subject.id.to_string());
        }

        // Keep a dangling reference selectable so saving does not drop it
        self.removed_subject = draft.subject_id.filter(|id| store.subject(*id).is_none());
        if let Some(id) = self.removed_subject {
            options.push(SUBJECT_REMOVED_PLACEHOLDER.to_string());
            self.subject_values.push(id.to_string());
        }

        let current = draft.subject_id.map(|id| id.to_string()).unwrap_or_default();
        let selected = self
            .subject_values
            .iter()
            .position(|value| *value == current)
            .unwrap_or(0);
        let date = draft.date.map(datetime::format_ymd).unwrap_or_default();

        self.form = FormState::new(vec![
            FormField::text("Title", draft.title),
            FormField::text("Date (YYYY-MM-DD)", date),
            FormField::choice("Subject", options, selected),
            FormField::text("Notes", draft.notes),
        ]);
    }

    /// Resolve the chosen subject option back to an id
    fn subject_id(&self, session: &Session) -> Option<EntityId> {
        let value = self
            .form
            .selected(SUBJECT)
            .and_then(|index| self.subject_values.get(index))?;

        match session.store().lookup_subject(value) {
            Some(subject) => Some(subject.id),
            None => self.removed_subject.filter(|id| id.to_string() == *value),
        }
    }

    fn draft(&self, session: &Session) -> EventDraft {
        EventDraft {
            title: self.form.value(TITLE).to_string(),
            date: datetime::parse_form_date(self.form.value(DATE)),
            subject_id: self.subject_id(session),
            notes: self.form.value(NOTES).to_string(),
        }
    }
}

impl Default for EventFormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EventFormScreen {
    fn handle_key_events(&mut self, key: KeyEvent, session: &Session) -> Action {
        if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return match session.selection().event {
                Some(id) => Action::DeleteEvent(id),
                None => Action::None,
            };
        }

        match self.form.handle_key(key) {
            FormEvent::Submit => Action::SaveEvent(self.draft(session)),
            FormEvent::Cancel => Action::Back,
            FormEvent::Changed | FormEvent::Unhandled => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, _session: &Session) {
        let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.form.render(f, inner);
    }

    fn on_focus(&mut self, session: &Session) {
        // New events default to today so they show up on Home
        let draft = match session.selected_event() {
            Some(event) => event.to_draft(),
            None => EventDraft {
                date: Some(session.today()),
                ..EventDraft::default()
            },
        };
        self.load(session, draft);
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn key_hints(&self, session: &Session) -> Vec<InstructionShortcut> {
        let mut hints = vec![
            shortcuts::ENTER_SAVE,
            shortcuts::TAB_NEXT,
            ("←/→", Color::Cyan, " Subject"),
        ];
        if session.is_editing_event() {
            hints.push(shortcuts::DELETE);
        }
        hints.push(shortcuts::ESC_CANCEL);
        hints
    }
}
