use super::{EntityId, Grade};
use serde::{Deserialize, Serialize};

/// Color tag given to subjects created from the form.
pub const DEFAULT_SUBJECT_COLOR: &str = "blue";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: EntityId,
    pub name: String,
    pub teacher: String,
    pub start_time: String,
    pub end_time: String,
    pub group: String,
    pub color: String,
    pub notes: String,
    pub grades: Vec<Grade>,
}

/// Field set submitted by the add/edit subject form.
///
/// Nothing here is validated: empty strings are accepted as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectDraft {
    pub name: String,
    pub teacher: String,
    pub start_time: String,
    pub end_time: String,
    pub group: String,
    pub color: String,
    pub notes: String,
}

impl Default for SubjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            teacher: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            group: String::new(),
            color: DEFAULT_SUBJECT_COLOR.to_string(),
            notes: String::new(),
        }
    }
}

impl Subject {
    /// Build a new subject from a draft. Grades always start empty.
    pub fn from_draft(id: EntityId, draft: SubjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            teacher: draft.teacher,
            start_time: draft.start_time,
            end_time: draft.end_time,
            group: draft.group,
            color: draft.color,
            notes: draft.notes,
            grades: Vec::new(),
        }
    }

    /// Overwrite the editable fields, keeping id and grades.
    pub fn apply_draft(&mut self, draft: SubjectDraft) {
        self.name = draft.name;
        self.teacher = draft.teacher;
        self.start_time = draft.start_time;
        self.end_time = draft.end_time;
        self.group = draft.group;
        self.color = draft.color;
        self.notes = draft.notes;
    }

    /// Draft pre-populated from this subject, used by the edit form.
    pub fn to_draft(&self) -> SubjectDraft {
        SubjectDraft {
            name: self.name.clone(),
            teacher: self.teacher.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            group: self.group.clone(),
            color: self.color.clone(),
            notes: self.notes.clone(),
        }
    }

    /// "10:00 - 12:00" style schedule line.
    pub fn schedule(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}
