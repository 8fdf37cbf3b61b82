use crate::auth::Credentials;
use crate::session::Session;
use crate::ui::components::dialogs::common::{create_dialog_block, shortcuts, InstructionShortcut};
use crate::ui::components::{FormEvent, FormField, FormState};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

const USERNAME: usize = 0;
const PASSWORD: usize = 1;

pub struct LoginScreen {
    form: FormState,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![FormField::text("Username", ""), FormField::secret("Password")]),
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials {
            username: self.form.value(USERNAME).trim().to_string(),
            password: self.form.value(PASSWORD).to_string(),
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoginScreen {
    fn handle_key_events(&mut self, key: KeyEvent, _session: &Session) -> Action {
        match self.form.handle_key(key) {
            FormEvent::Submit => Action::Login(self.credentials()),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, _session: &Session) {
        let area = LayoutManager::centered_rect_lines(60, 12, rect);
        let block = create_dialog_block(" Log in ", Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Min(6)])
            .split(inner);

        let welcome = Paragraph::new("Welcome back! Sign in to see your day.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(welcome, chunks[0]);
        self.form.render(f, chunks[1]);
    }

    fn on_focus(&mut self, _session: &Session) {
        self.form.reset();
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn key_hints(&self, _session: &Session) -> Vec<InstructionShortcut> {
        vec![
            ("Enter", Color::Green, " Log in"),
            shortcuts::TAB_NEXT,
            ("Ctrl+C", Color::Red, " Quit"),
        ]
    }
}
