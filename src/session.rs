//! Per-login application state.
//!
//! A [`Session`] bundles the signed-in user, the entity store, the selection
//! context and the navigation stack. The UI holds exactly one and passes it by
//! reference to every screen. A session is created sitting on the login view
//! and reset on logout, which brings back fresh mock data.

use crate::config::Config;
use crate::constants::DEFAULT_MAX_HISTORY_DEPTH;
use crate::entities::{EntityId, Event, EventDraft, Subject, SubjectDraft, User};
use crate::navigation::{NavigationFrame, NavigationStack, SelectionContext, Tab, ViewId};
use crate::storage::{seed, EntityStore, GradeError};
use crate::utils::datetime;
use chrono::NaiveDate;

/// Knobs a session is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Tab shown right after login
    pub start_tab: Tab,
    /// Maximum number of frames kept in the view history
    pub max_history_depth: usize,
    /// Date the Home screen treats as today
    pub today: NaiveDate,
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            start_tab: config.ui.start_tab(),
            max_history_depth: config.ui.max_history_depth,
            today: config.display.today_date(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            start_tab: Tab::Home,
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
            today: datetime::today(),
        }
    }
}

/// Result of submitting a subject or event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(EntityId),
    Updated(EntityId),
    /// The form was in edit mode but its target no longer exists.
    Missing(EntityId),
}

/// Why a password change was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Current password is incorrect")]
    WrongCurrentPassword,

    #[error("New password cannot be empty")]
    EmptyNewPassword,

    #[error("New password and confirmation do not match")]
    ConfirmationMismatch,
}

pub struct Session {
    settings: SessionSettings,
    user: User,
    store: EntityStore,
    selection: SelectionContext,
    navigation: NavigationStack,
}

impl Session {
    /// New session on the login view, loaded with the mock data.
    pub fn new(settings: SessionSettings) -> Self {
        let store = EntityStore::seeded(settings.today);
        Self::with_store(settings, seed::user(), store)
    }

    pub fn with_store(settings: SessionSettings, user: User, store: EntityStore) -> Self {
        let navigation = NavigationStack::new(settings.max_history_depth);
        Self {
            settings,
            user,
            store,
            selection: SelectionContext::default(),
            navigation,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    pub fn selection(&self) -> SelectionContext {
        self.selection
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    pub fn current_view(&self) -> ViewId {
        self.navigation.current()
    }

    pub fn active_tab(&self) -> Tab {
        self.navigation.active_tab()
    }

    pub fn today(&self) -> NaiveDate {
        self.settings.today
    }

    /// Selected subject, if one is selected and still exists.
    pub fn selected_subject(&self) -> Option<&Subject> {
        self.selection.subject.and_then(|id| self.store.subject(id))
    }

    /// Selected event, if one is selected and still exists.
    pub fn selected_event(&self) -> Option<&Event> {
        self.selection.event.and_then(|id| self.store.event(id))
    }

    /// The subject form edits when a subject is selected and adds otherwise.
    pub fn is_editing_subject(&self) -> bool {
        self.selection.subject.is_some()
    }

    pub fn is_editing_event(&self) -> bool {
        self.selection.event.is_some()
    }

    // --- Navigation ---------------------------------------------------------

    /// Move to `view`, remembering where we came from.
    pub fn navigate_to(&mut self, view: ViewId) {
        self.navigation.navigate_to(view, self.selection);
    }

    /// Pop one frame and put its selection back. No-op on an empty history.
    pub fn go_back(&mut self) -> Option<NavigationFrame> {
        let frame = self.navigation.go_back()?;
        self.selection = frame.selection;
        Some(frame)
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.navigation.switch_tab(tab);
    }

    /// Leave the login view for the configured start tab.
    pub fn complete_login(&mut self) {
        log::info!("Session: '{}' logged in", self.user.handle);
        self.navigation.switch_tab(self.settings.start_tab);
    }

    /// Drop everything the user did and go back to the login view with
    /// fresh mock data.
    pub fn logout(&mut self) {
        log::info!("Session: '{}' logged out", self.user.handle);
        self.user = seed::user();
        self.store = EntityStore::seeded(self.settings.today);
        self.selection.clear();
        self.navigation.reset_to_login();
    }

    fn navigate_with(&mut self, view: ViewId, update: impl FnOnce(&mut SelectionContext)) {
        // The frame keeps the selection of the view being left.
        self.navigation.navigate_to(view, self.selection);
        update(&mut self.selection);
    }

    pub fn open_subject(&mut self, id: EntityId) {
        self.navigate_with(ViewId::SubjectDetail, |s| s.select_subject(Some(id)));
    }

    pub fn open_event(&mut self, id: EntityId) {
        self.navigate_with(ViewId::EventDetail, |s| s.select_event(Some(id)));
    }

    /// Open the subject form in add mode.
    pub fn new_subject(&mut self) {
        self.navigate_with(ViewId::EditSubject, |s| s.select_subject(None));
    }

    /// Open the subject form for the subject currently selected.
    pub fn edit_selected_subject(&mut self) {
        self.navigate_to(ViewId::EditSubject);
    }

    pub fn new_event(&mut self) {
        self.navigate_with(ViewId::EditEvent, |s| s.select_event(None));
    }

    pub fn edit_selected_event(&mut self) {
        self.navigate_to(ViewId::EditEvent);
    }

    pub fn open_change_password(&mut self) {
        self.navigate_to(ViewId::ChangePassword);
    }

    // --- Mutations ----------------------------------------------------------

    /// Create or update a subject from the form, then go back.
    pub fn save_subject(&mut self, draft: SubjectDraft) -> SaveOutcome {
        let outcome = match self.selection.subject {
            Some(id) => match self.store.subject(id).cloned() {
                Some(mut subject) => {
                    subject.apply_draft(draft);
                    self.store.update_subject(subject);
                    SaveOutcome::Updated(id)
                }
                None => SaveOutcome::Missing(id),
            },
            None => SaveOutcome::Created(self.store.create_subject(draft)),
        };
        self.go_back();
        outcome
    }

    /// Delete a subject and land on the Subjects tab with an empty history.
    /// Events of the subject are kept.
    pub fn delete_subject(&mut self, id: EntityId) -> bool {
        let removed = self.store.delete_subject(id);
        self.navigation.switch_tab(Tab::Subjects);
        removed
    }

    pub fn save_event(&mut self, draft: EventDraft) -> SaveOutcome {
        let outcome = match self.selection.event {
            Some(id) => match self.store.event(id).cloned() {
                Some(mut event) => {
                    event.apply_draft(draft);
                    self.store.update_event(event);
                    SaveOutcome::Updated(id)
                }
                None => SaveOutcome::Missing(id),
            },
            None => SaveOutcome::Created(self.store.create_event(draft)),
        };
        self.go_back();
        outcome
    }

    /// Delete an event and go back, skipping any detail view of the event
    /// that was just removed.
    pub fn delete_event(&mut self, id: EntityId) -> bool {
        let removed = self.store.delete_event(id);
        self.go_back();
        while self.current_view() == ViewId::EventDetail && self.selection.event == Some(id) {
            if self.go_back().is_none() {
                self.navigation.switch_tab(self.navigation.active_tab());
                break;
            }
        }
        removed
    }

    /// Check the current password and store the new one, then go back.
    pub fn change_password(&mut self, current: &str, new: &str, confirm: &str) -> Result<(), PasswordError> {
        if current != self.user.password {
            return Err(PasswordError::WrongCurrentPassword);
        }
        if new.is_empty() {
            return Err(PasswordError::EmptyNewPassword);
        }
        if new != confirm {
            return Err(PasswordError::ConfirmationMismatch);
        }
        self.user.password = new.to_string();
        log::info!("Session: password changed for '{}'", self.user.handle);
        self.go_back();
        Ok(())
    }

    pub fn record_grade(&mut self, event_id: EntityId, input: &str) -> Result<Option<f64>, GradeError> {
        self.store.record_grade(event_id, input)
    }

    pub fn record_attendance(&mut self, event_id: EntityId, attended: bool) -> bool {
        self.store.record_attendance(event_id, attended)
    }

    pub fn toggle_completed(&mut self, event_id: EntityId) -> bool {
        self.store.toggle_completed(event_id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
