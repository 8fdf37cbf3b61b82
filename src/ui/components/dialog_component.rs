//! Modal dialog component.
//!
//! Dialogs sit on top of the current screen and take every key press while
//! they are visible. Quick-entry dialogs (grade and attendance) answer with a
//! record action; message dialogs (error, info, help and logs) only scroll and
//! close.

use crate::logger::Logger;
use crate::session::Session;
use crate::ui::components::dialogs::{record_dialogs, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Current value of the attendance toggle
    pub attended: bool,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            attended: false,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Open or close the dialog. Any other action is handed back untouched.
    pub fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                match &dialog_type {
                    DialogType::RecordGrade { current, .. } => self.input_buffer = current.clone(),
                    DialogType::RecordAttendance { attended, .. } => self.attended = *attended,
                    _ => {}
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.attended = false;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(PAGE_SIZE);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = self.scrollbar_state.position(0);
    }

    /// Handle scrolling keys shared by message dialogs. Returns true when consumed.
    fn handle_scroll_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            _ => return false,
        }
        true
    }

    fn event_title(session: &Session, event_id: u64) -> String {
        session
            .store()
            .event(event_id)
            .map(|event| event.title.clone())
            .unwrap_or_default()
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent, _session: &Session) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::RecordGrade { event_id, .. } => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => {
                    let action = Action::RecordGrade {
                        event_id,
                        input: self.input_buffer.clone(),
                    };
                    self.clear_dialog();
                    action
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    Action::None
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    Action::None
                }
                _ => Action::None,
            },
            DialogType::RecordAttendance { event_id, .. } => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    self.attended = !self.attended;
                    Action::None
                }
                KeyCode::Enter => {
                    let action = Action::RecordAttendance {
                        event_id,
                        attended: self.attended,
                    };
                    self.clear_dialog();
                    action
                }
                _ => Action::None,
            },
            DialogType::Info(_) | DialogType::Error(_) => {
                if self.handle_scroll_key(key.code) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.handle_scroll_key(code);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.handle_scroll_key(code);
                    Action::None
                }
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, session: &Session) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::RecordGrade { event_id, .. } => {
                let title = Self::event_title(session, event_id);
                record_dialogs::render_grade_dialog(f, rect, &title, &self.input_buffer);
            }
            DialogType::RecordAttendance { event_id, .. } => {
                let title = Self::event_title(session, event_id);
                record_dialogs::render_attendance_dialog(f, rect, &title, self.attended);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &message, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &message, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => {
                let logs = self.logger.get_logs();
                system_dialogs::render_logs_dialog(f, rect, &logs, self.scroll_offset, &mut self.scrollbar_state);
            }
        }
    }

    fn captures_text(&self) -> bool {
        self.is_visible()
    }
}
