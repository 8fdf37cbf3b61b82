use crate::session::Session;
use crate::ui::components::dialogs::common::{shortcuts, InstructionShortcut};
use crate::ui::components::{FormEvent, FormField, FormState};
use crate::ui::core::{Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders},
    Frame,
};

const CURRENT: usize = 0;
const NEW: usize = 1;
const CONFIRM: usize = 2;

pub struct ChangePasswordScreen {
    form: FormState,
}

impl ChangePasswordScreen {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::secret("Current password"),
                FormField::secret("New password"),
                FormField::secret("Confirm new password"),
            ]),
        }
    }
}

impl Default for ChangePasswordScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ChangePasswordScreen {
    fn handle_key_events(&mut self, key: KeyEvent, _session: &Session) -> Action {
        match self.form.handle_key(key) {
            FormEvent::Submit => Action::ChangePassword {
                current: self.form.value(CURRENT).to_string(),
                new: self.form.value(NEW).to_string(),
                confirm: self.form.value(CONFIRM).to_string(),
            },
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

    fn on_focus(&mut self, _session: &Session) {
        self.form.reset();
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn key_hints(&self, _session: &Session) -> Vec<InstructionShortcut> {
        vec![shortcuts::ENTER_SAVE, shortcuts::TAB_NEXT, shortcuts::ESC_CANCEL]
    }
}
