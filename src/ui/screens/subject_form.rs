//! Add/edit subject form

use crate::entities::SubjectDraft;
use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::components::{FormEvent, FormField, FormState};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders},
    Frame,
};

const NAME: usize = 0;
const TEACHER: usize = 1;
const START: usize = 2;
const END: usize = 3;
const GROUP: usize = 4;
const NOTES: usize = 5;

pub struct SubjectFormScreen {
    form: FormState,
    /// Not editable here; carried through so editing keeps the subject's color
    color: String,
}

impl SubjectFormScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            form: FormState::default(),
            color: String::new(),
        };
        screen.load(SubjectDraft::default());
        screen
    }

    fn load(&mut self, draft: SubjectDraft) {
        self.form = FormState::new(vec![
            FormField::text("Name", draft.name),
            FormField::text("Teacher", draft.teacher),
            FormField::text("Start time", draft.start_time),
            FormField::text("End time", draft.end_time),
            FormField::text("Group", draft.group),
            FormField::text("Notes", draft.notes),
        ]);
        self.color = draft.color;
    }

    fn draft(&self) -> SubjectDraft {
        SubjectDraft {
            name: self.form.value(NAME).to_string(),
            teacher: self.form.value(TEACHER).to_string(),
            start_time: self.form.value(START).to_string(),
            end_time: self.form.value(END).to_string(),
            group: self.form.value(GROUP).to_string(),
            color: self.color.clone(),
            notes: self.form.value(NOTES).to_string(),
        }
    }
}

impl Default for SubjectFormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SubjectFormScreen {
    fn handle_key_events(&mut self, key: KeyEvent, session: &Session) -> Action {
        if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return match session.selection().subject {
                Some(id) => Action::DeleteSubject(id),
                None => Action::None,
            };
        }

        match self.form.handle_key(key) {
            FormEvent::Submit => Action::SaveSubject(self.draft()),
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
        let draft = session.selected_subject().map(|subject| subject.to_draft()).unwrap_or_default();
        self.load(draft);
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn key_hints(&self, session: &Session) -> Vec<InstructionShortcut> {
        let mut hints = vec![shortcuts::ENTER_SAVE, shortcuts::TAB_NEXT];
        if session.is_editing_subject() {
            hints.push(shortcuts::DELETE);
        }
        hints.push(shortcuts::ESC_CANCEL);
        hints
    }
}
