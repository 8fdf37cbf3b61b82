use crate::auth::{AcceptAllAuthenticator, Authenticator, Credentials};
use crate::config::Config;
use crate::constants::{
    ERROR_GRADE_REJECTED, ERROR_LOGIN_FAILED, ERROR_PASSWORD_CHANGE_FAILED, SUCCESS_ATTENDANCE_RECORDED,
    SUCCESS_EVENT_CREATED, SUCCESS_EVENT_DELETED, SUCCESS_EVENT_UPDATED, SUCCESS_GRADE_CLEARED,
    SUCCESS_GRADE_RECORDED, SUCCESS_PASSWORD_CHANGED, SUCCESS_STATUS_UPDATED, SUCCESS_SUBJECT_CREATED,
    SUCCESS_SUBJECT_DELETED, SUCCESS_SUBJECT_UPDATED, WARNING_ITEM_MISSING,
};
use crate::logger::Logger;
use crate::navigation::{Tab, ViewDispatcher, ViewId};
use crate::session::{SaveOutcome, Session, SessionSettings};
use crate::storage::GradeError;
use crate::ui::components::dialogs::common::create_instructions_paragraph;
use crate::ui::components::{DialogComponent, Header, TabBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::screens::ScreenSet;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Root of the UI: owns the session and routes every key press to the
/// dialog, the current screen or the global shortcuts, then applies the
/// resulting [`Action`] to the session.
pub struct AppComponent {
    session: Session,
    authenticator: Box<dyn Authenticator>,

    // Component composition
    screens: ScreenSet,
    dialog: DialogComponent,

    logger: Logger,

    // Simple UI state
    show_tab_bar: bool,
    time_format: String,
    status_message: Option<String>,
    should_quit: bool,
    last_focused_view: Option<ViewId>,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        Self::with_authenticator(config, logger, Box::new(AcceptAllAuthenticator))
    }

    pub fn with_authenticator(config: &Config, logger: Logger, authenticator: Box<dyn Authenticator>) -> Self {
        let session = Session::new(SessionSettings::from_config(config));
        logger.log(format!(
            "AppComponent: Session ready (authenticator: {}, start tab: {})",
            authenticator.name(),
            session.settings().start_tab.label()
        ));

        let mut app = Self {
            session,
            authenticator,
            screens: ScreenSet::new(&config.display),
            dialog: DialogComponent::new(logger.clone()),
            logger,
            show_tab_bar: config.ui.show_tab_bar,
            time_format: config.display.time_format.clone(),
            status_message: None,
            should_quit: false,
            last_focused_view: None,
        };
        app.refresh_focus();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_view(&self) -> ViewId {
        self.session.current_view()
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Give the current screen a chance to reload its state after a view change
    fn refresh_focus(&mut self) {
        let view = self.session.current_view();
        if self.last_focused_view != Some(view) {
            self.screens.screen_mut(view).on_focus(&self.session);
            self.last_focused_view = Some(view);
        }
    }

    /// Handle global keyboard shortcuts that aren't screen-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let view = self.session.current_view();
        let logged_in = view != ViewId::Login;

        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char(c @ '1'..='3') if logged_in => match Tab::ALL.get(c as usize - '1' as usize) {
                Some(tab) => Action::SwitchTab(*tab),
                None => Action::None,
            },
            KeyCode::Left if view.as_tab().is_some() => Action::SwitchTab(self.session.active_tab().previous()),
            KeyCode::Right if view.as_tab().is_some() => Action::SwitchTab(self.session.active_tab().next()),
            KeyCode::Esc if self.session.navigation().can_go_back() => Action::Back,
            _ => Action::None,
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    fn report_save(&mut self, outcome: SaveOutcome, created: &str, updated: &str) {
        match outcome {
            SaveOutcome::Created(id) => {
                self.logger.log(format!("Save: created #{}", id));
                self.set_status(created);
            }
            SaveOutcome::Updated(id) => {
                self.logger.log(format!("Save: updated #{}", id));
                self.set_status(updated);
            }
            SaveOutcome::Missing(id) => {
                self.logger.log(format!("Save: #{} no longer exists, nothing saved", id));
                self.set_status(WARNING_ITEM_MISSING);
            }
        }
    }

    async fn login(&mut self, credentials: Credentials) -> Action {
        match self.authenticator.authenticate(&credentials).await {
            Ok(()) => {
                self.logger.log(format!("Login: '{}' signed in", credentials.username));
                self.session.complete_login();
                Action::None
            }
            Err(e) => {
                self.logger.log(format!("Login: failed for '{}': {}", credentials.username, e));
                Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_LOGIN_FAILED, e)))
            }
        }
    }

    /// Handle app-level actions that require business logic. Returns a
    /// follow-up action, or [`Action::None`] when there is nothing left to do.
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Login(credentials) => self.login(credentials).await,
            Action::Logout => {
                self.logger.log("Session: logging out".to_string());
                self.session.logout();
                self.dialog.update(Action::HideDialog);
                Action::None
            }
            Action::SwitchTab(tab) => {
                if self.session.current_view() != ViewId::Login {
                    self.logger.log(format!("Navigation: switching to tab {}", tab.label()));
                    self.session.switch_tab(tab);
                }
                Action::None
            }
            Action::Back => {
                match self.session.go_back() {
                    Some(frame) => self.logger.log(format!("Navigation: back to {}", frame.view)),
                    None => self.logger.log("Navigation: history empty, staying".to_string()),
                }
                Action::None
            }
            Action::OpenSubject(id) => {
                self.logger.log(format!("Navigation: opening subject #{}", id));
                self.session.open_subject(id);
                Action::None
            }
            Action::OpenEvent(id) => {
                self.logger.log(format!("Navigation: opening event #{}", id));
                self.session.open_event(id);
                Action::None
            }
            Action::NewSubject => {
                self.session.new_subject();
                Action::None
            }
            Action::EditSubject => {
                self.session.edit_selected_subject();
                Action::None
            }
            Action::NewEvent => {
                self.session.new_event();
                Action::None
            }
            Action::EditEvent => {
                self.session.edit_selected_event();
                Action::None
            }
            Action::OpenChangePassword => {
                self.session.open_change_password();
                Action::None
            }
            Action::SaveSubject(draft) => {
                let outcome = self.session.save_subject(draft);
                self.report_save(outcome, SUCCESS_SUBJECT_CREATED, SUCCESS_SUBJECT_UPDATED);
                Action::None
            }
            Action::DeleteSubject(id) => {
                if self.session.delete_subject(id) {
                    self.logger.log(format!("Delete: subject #{} removed", id));
                    self.set_status(SUCCESS_SUBJECT_DELETED);
                } else {
                    self.set_status(WARNING_ITEM_MISSING);
                }
                Action::None
            }
            Action::SaveEvent(draft) => {
                let outcome = self.session.save_event(draft);
                self.report_save(outcome, SUCCESS_EVENT_CREATED, SUCCESS_EVENT_UPDATED);
                Action::None
            }
            Action::DeleteEvent(id) => {
                if self.session.delete_event(id) {
                    self.logger.log(format!("Delete: event #{} removed", id));
                    self.set_status(SUCCESS_EVENT_DELETED);
                } else {
                    self.set_status(WARNING_ITEM_MISSING);
                }
                Action::None
            }
            Action::RecordGrade { event_id, input } => {
                self.logger.log(format!("Grade: event #{} <- '{}'", event_id, input));
                match self.session.record_grade(event_id, &input) {
                    Ok(Some(_)) => self.set_status(SUCCESS_GRADE_RECORDED),
                    Ok(None) => self.set_status(SUCCESS_GRADE_CLEARED),
                    Err(GradeError::EventNotFound(_)) => self.set_status(WARNING_ITEM_MISSING),
                    Err(e) => {
                        self.logger.log(format!("Grade: refused for event #{}: {}", event_id, e));
                        return Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_GRADE_REJECTED, e)));
                    }
                }
                Action::None
            }
            Action::RecordAttendance { event_id, attended } => {
                self.logger.log(format!("Attendance: event #{} <- {}", event_id, attended));
                if self.session.record_attendance(event_id, attended) {
                    self.set_status(SUCCESS_ATTENDANCE_RECORDED);
                } else {
                    self.set_status(WARNING_ITEM_MISSING);
                }
                Action::None
            }
            Action::ToggleCompleted(id) => {
                if self.session.toggle_completed(id) {
                    self.set_status(SUCCESS_STATUS_UPDATED);
                } else {
                    self.set_status(WARNING_ITEM_MISSING);
                }
                Action::None
            }
            Action::ChangePassword { current, new, confirm } => {
                match self.session.change_password(&current, &new, &confirm) {
                    Ok(()) => {
                        self.set_status(SUCCESS_PASSWORD_CHANGED);
                        Action::None
                    }
                    Err(e) => {
                        self.logger.log(format!("Profile: password change refused: {}", e));
                        Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_PASSWORD_CHANGE_FAILED, e)))
                    }
                }
            }
            Action::ShowDialog(_) | Action::HideDialog => self.dialog.update(action),
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::None => Action::None,
        }
    }

    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let mut action = action;
        while action != Action::None {
            action = self.handle_app_action(action).await;
        }

        self.refresh_focus();
        Ok(())
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        self.status_message = None;

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key, &self.session);
        }

        let screen = self.screens.screen_mut(self.session.current_view());
        let action = screen.handle_key_events(key, &self.session);
        let captures_text = screen.captures_text();

        if action == Action::None && !captures_text {
            self.handle_global_key(key)
        } else {
            action
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let view = self.session.current_view();
        let show_tab_bar = self.show_tab_bar && ViewDispatcher::shows_tab_bar(view);
        let areas = LayoutManager::screen_layout(rect, show_tab_bar);

        let editing = match view {
            ViewId::EditSubject => self.session.is_editing_subject(),
            ViewId::EditEvent => self.session.is_editing_event(),
            _ => false,
        };
        let clock = Local::now().format(&self.time_format).to_string();
        let right = if view == ViewId::Login {
            clock
        } else {
            format!("{} · {}", self.session.user().handle, clock)
        };
        Header::render(
            f,
            areas.header,
            ViewDispatcher::title(view, editing),
            ViewDispatcher::shows_back(view),
            &right,
        );

        let screen = self.screens.screen_mut(view);
        screen.render(f, areas.body, &self.session);

        match &self.status_message {
            Some(message) => {
                let status = Paragraph::new(message.clone())
                    .style(Style::default().fg(Color::Green))
                    .alignment(Alignment::Center);
                f.render_widget(status, areas.hints);
            }
            None => {
                let hints = screen.key_hints(&self.session);
                f.render_widget(create_instructions_paragraph(&hints), areas.hints);
            }
        }

        if let Some(tab_area) = areas.tab_bar {
            TabBar::render(f, tab_area, self.session.active_tab());
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect, &self.session);
        }
    }
}
