use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every view the application can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Login,
    Home,
    SubjectList,
    SubjectDetail,
    EventDetail,
    EditSubject,
    EditEvent,
    Profile,
    ChangePassword,
}

impl ViewId {
    pub const ALL: [ViewId; 9] = [
        ViewId::Login,
        ViewId::Home,
        ViewId::SubjectList,
        ViewId::SubjectDetail,
        ViewId::EventDetail,
        ViewId::EditSubject,
        ViewId::EditEvent,
        ViewId::Profile,
        ViewId::ChangePassword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Login => "login",
            ViewId::Home => "home",
            ViewId::SubjectList => "subject-list",
            ViewId::SubjectDetail => "subject-detail",
            ViewId::EventDetail => "event-detail",
            ViewId::EditSubject => "edit-subject",
            ViewId::EditEvent => "edit-event",
            ViewId::Profile => "profile",
            ViewId::ChangePassword => "change-password",
        }
    }

    /// Parse a view identifier, falling back to [`ViewId::Home`] for anything
    /// unrecognized.
    pub fn parse_or_home(raw: &str) -> ViewId {
        raw.parse().unwrap_or(ViewId::Home)
    }

    /// The tab this view is the root of, if it is a top-level view.
    pub fn as_tab(self) -> Option<Tab> {
        match self {
            ViewId::Home => Some(Tab::Home),
            ViewId::SubjectList => Some(Tab::Subjects),
            ViewId::Profile => Some(Tab::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view identifier '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == normalized)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Top-level tabs shown in the bottom bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Subjects,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Subjects, Tab::Profile];

    /// View shown when the tab is activated.
    pub fn view(self) -> ViewId {
        match self {
            Tab::Home => ViewId::Home,
            Tab::Subjects => ViewId::SubjectList,
            Tab::Profile => ViewId::Profile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Subjects => "Subjects",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Subjects => 1,
            Tab::Profile => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl FromStr for Tab {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Tab::Home),
            "subjects" => Ok(Tab::Subjects),
            "profile" => Ok(Tab::Profile),
            _ => Err(UnknownView(s.to_string())),
        }
    }
}
