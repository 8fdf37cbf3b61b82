use super::store::EntityStore;
use crate::entities::{EntityId, Subject, SubjectDraft};

impl EntityStore {
    /// Append a new subject built from `draft` and return its fresh id.
    pub fn create_subject(&mut self, draft: SubjectDraft) -> EntityId {
        let id = self.fresh_id();
        log::debug!("Store: creating subject {} '{}'", id, draft.name);
        self.subjects.push(Subject::from_draft(id, draft));
        id
    }

    /// Replace the subject sharing `subject.id`. Returns `false` and leaves the
    /// collection untouched when there is no such subject.
    pub fn update_subject(&mut self, subject: Subject) -> bool {
        match self.subjects.iter_mut().find(|s| s.id == subject.id) {
            Some(slot) => {
                log::debug!("Store: updating subject {} '{}'", subject.id, subject.name);
                *slot = subject;
                true
            }
            None => {
                log::debug!("Store: update ignored, subject {} not found", subject.id);
                false
            }
        }
    }

    /// Remove the subject with `id`. Events pointing at it are kept and their
    /// subject reference is left dangling.
    pub fn delete_subject(&mut self, id: EntityId) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != id);
        let removed = self.subjects.len() != before;
        if removed {
            log::debug!("Store: deleted subject {}", id);
        } else {
            log::debug!("Store: delete ignored, subject {} not found", id);
        }
        removed
    }

    /// Find a subject from the string form of its id, as it comes out of a
    /// form field. Anything that does not parse is simply not found.
    pub fn lookup_subject(&self, raw_id: &str) -> Option<&Subject> {
        let id = raw_id.trim().parse::<EntityId>().ok()?;
        self.subject(id)
    }
}
