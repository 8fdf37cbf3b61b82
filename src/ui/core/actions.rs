use crate::auth::Credentials;
use crate::entities::{EntityId, EventDraft, SubjectDraft};
use crate::navigation::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Session
    Login(Credentials),
    Logout,

    // Navigation
    SwitchTab(Tab),
    Back,
    OpenSubject(EntityId),
    OpenEvent(EntityId),
    NewSubject,
    EditSubject,
    NewEvent,
    EditEvent,
    OpenChangePassword,

    // Subject operations
    SaveSubject(SubjectDraft),
    DeleteSubject(EntityId),

    // Event operations
    SaveEvent(EventDraft),
    DeleteEvent(EntityId),
    RecordGrade {
        event_id: EntityId,
        input: String,
    },
    RecordAttendance {
        event_id: EntityId,
        attended: bool,
    },
    ToggleCompleted(EntityId),

    // Profile
    ChangePassword {
        current: String,
        new: String,
        confirm: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    /// `current` is the recorded grade as text, empty when ungraded
    RecordGrade { event_id: EntityId, current: String },
    RecordAttendance { event_id: EntityId, attended: bool },
    Error(String),
    Info(String),
    Help,
    Logs,
}
