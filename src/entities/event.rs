use super::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of calendar entry an event is. Decides which action the
/// event detail screen offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Class,
    Assignment,
    #[default]
    Other,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventKind::Class => "class",
            EventKind::Assignment => "assignment",
            EventKind::Other => "other",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    /// Owning subject. Not enforced: the subject may have been deleted since.
    pub subject_id: Option<EntityId>,
    pub title: String,
    pub kind: EventKind,
    pub date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
    pub completed: bool,
    pub attendance: Option<bool>,
    pub grade: Option<f64>,
}

/// Field set submitted by the add/edit event form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub subject_id: Option<EntityId>,
    pub notes: String,
}

impl Event {
    /// Build a new event from a draft. Events created from the form have no
    /// kind of their own and end up as [`EventKind::Other`].
    pub fn from_draft(id: EntityId, draft: EventDraft) -> Self {
        Self {
            id,
            subject_id: draft.subject_id,
            title: draft.title,
            kind: EventKind::Other,
            date: draft.date,
            start_time: String::new(),
            end_time: String::new(),
            notes: draft.notes,
            completed: false,
            attendance: None,
            grade: None,
        }
    }

    /// Overwrite the form-editable fields, leaving kind, times and progress alone.
    pub fn apply_draft(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.date = draft.date;
        self.subject_id = draft.subject_id;
        self.notes = draft.notes;
    }

    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            date: self.date,
            subject_id: self.subject_id,
            notes: self.notes.clone(),
        }
    }
}
