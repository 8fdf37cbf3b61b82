use super::view::ViewId;
use crate::constants::{
    TITLE_CHANGE_PASSWORD, TITLE_EDIT_EVENT, TITLE_EDIT_SUBJECT, TITLE_EVENT_DETAIL, TITLE_HOME, TITLE_LOGIN,
    TITLE_NEW_EVENT, TITLE_NEW_SUBJECT, TITLE_PROFILE, TITLE_SUBJECTS, TITLE_SUBJECT_DETAIL,
};

/// Maps the current view id to what gets drawn.
///
/// The view-to-screen table itself is `ScreenSet::screen_mut` in the UI
/// layer, which matches on the typed [`ViewId`]. This type owns the decisions
/// that do not depend on ratatui: whether the tab bar is visible, the header
/// title, and which view a raw identifier stands for.
pub struct ViewDispatcher;

impl ViewDispatcher {
    /// Resolve a raw identifier. Unknown identifiers land on Home.
    ///
    /// Views inside the app are always typed; this is the entry point for
    /// identifiers coming from text.
    pub fn resolve(raw: &str) -> ViewId {
        ViewId::parse_or_home(raw)
    }

    /// The tab bar is only shown on the three top-level views.
    pub fn shows_tab_bar(view: ViewId) -> bool {
        view.as_tab().is_some()
    }

    /// Whether the view offers a back action in its header.
    pub fn shows_back(view: ViewId) -> bool {
        matches!(
            view,
            ViewId::SubjectDetail
                | ViewId::EventDetail
                | ViewId::EditSubject
                | ViewId::EditEvent
                | ViewId::ChangePassword
        )
    }

    /// Header title. Form views read differently in edit mode.
    pub fn title(view: ViewId, editing: bool) -> &'static str {
        match view {
            ViewId::Login => TITLE_LOGIN,
            ViewId::Home => TITLE_HOME,
            ViewId::SubjectList => TITLE_SUBJECTS,
            ViewId::SubjectDetail => TITLE_SUBJECT_DETAIL,
            ViewId::EventDetail => TITLE_EVENT_DETAIL,
            ViewId::EditSubject if editing => TITLE_EDIT_SUBJECT,
            ViewId::EditSubject => TITLE_NEW_SUBJECT,
            ViewId::EditEvent if editing => TITLE_EDIT_EVENT,
            ViewId::EditEvent => TITLE_NEW_EVENT,
            ViewId::Profile => TITLE_PROFILE,
            ViewId::ChangePassword => TITLE_CHANGE_PASSWORD,
        }
    }
}
