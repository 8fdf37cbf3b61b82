use super::actions::Action;
use crate::session::Session;
use crate::ui::components::dialogs::common::InstructionShortcut;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A screen of the application. Components read the session but never
/// mutate it; they answer key presses with an [`Action`].
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent, session: &Session) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect, session: &Session);

    /// Called when the component's view becomes the current view.
    fn on_focus(&mut self, _session: &Session) {}

    /// True while printable keys are text input, so global shortcuts must not fire.
    fn captures_text(&self) -> bool {
        false
    }

    /// Shortcuts shown in the hint line under the screen.
    fn key_hints(&self, _session: &Session) -> Vec<InstructionShortcut> {
        Vec::new()
    }
}
