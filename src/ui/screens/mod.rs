//! One screen per view identifier.
//!
//! [`ScreenSet`] owns every screen for the lifetime of the UI and hands out
//! the one matching the current [`ViewId`]. Screens keep only presentation
//! state (list cursor, form buffers); everything else is read from the
//! [`Session`](crate::session::Session) on each render.

pub mod change_password;
pub mod event_detail;
pub mod event_form;
pub mod home;
pub mod login;
pub mod profile;
pub mod subject_detail;
pub mod subject_form;
pub mod subject_list;

use crate::config::DisplayConfig;
use crate::navigation::ViewId;
use crate::ui::core::Component;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub use change_password::ChangePasswordScreen;
pub use event_detail::EventDetailScreen;
pub use event_form::EventFormScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use subject_detail::SubjectDetailScreen;
pub use subject_form::SubjectFormScreen;
pub use subject_list::SubjectListScreen;

pub struct ScreenSet {
    login: LoginScreen,
    home: HomeScreen,
    subject_list: SubjectListScreen,
    subject_detail: SubjectDetailScreen,
    event_detail: EventDetailScreen,
    subject_form: SubjectFormScreen,
    event_form: EventFormScreen,
    profile: ProfileScreen,
    change_password: ChangePasswordScreen,
}

impl ScreenSet {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            login: LoginScreen::new(),
            home: HomeScreen::new(),
            subject_list: SubjectListScreen::new(),
            subject_detail: SubjectDetailScreen::new(display.date_format.clone()),
            event_detail: EventDetailScreen::new(display.date_format.clone()),
            subject_form: SubjectFormScreen::new(),
            event_form: EventFormScreen::new(),
            profile: ProfileScreen::new(),
            change_password: ChangePasswordScreen::new(),
        }
    }

    /// The screen drawn for `view`
    pub fn screen_mut(&mut self, view: ViewId) -> &mut dyn Component {
        match view {
            ViewId::Login => &mut self.login,
            ViewId::Home => &mut self.home,
            ViewId::SubjectList => &mut self.subject_list,
            ViewId::SubjectDetail => &mut self.subject_detail,
            ViewId::EventDetail => &mut self.event_detail,
            ViewId::EditSubject => &mut self.subject_form,
            ViewId::EditEvent => &mut self.event_form,
            ViewId::Profile => &mut self.profile,
            ViewId::ChangePassword => &mut self.change_password,
        }
    }
}

impl Default for ScreenSet {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

/// "Label: value" line used by the detail screens
pub(crate) fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
        Span::styled(value.into(), Style::default().fg(Color::White)),
    ])
}

/// Bold section heading used by the detail screens
pub(crate) fn section_line(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}
