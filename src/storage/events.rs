use super::store::EntityStore;
use crate::constants::SUBJECT_REMOVED_PLACEHOLDER;
use crate::entities::{EntityId, Event, EventDraft};

/// Why a grade was not recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    #[error("Event {0} no longer exists")]
    EventNotFound(EntityId),

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

impl EntityStore {
    /// Append a new event built from `draft` and return its fresh id.
    pub fn create_event(&mut self, draft: EventDraft) -> EntityId {
        let id = self.fresh_id();
        log::debug!("Store: creating event {} '{}'", id, draft.title);
        self.events.push(Event::from_draft(id, draft));
        id
    }

    /// Replace the event sharing `event.id`, `false` when there is none.
    pub fn update_event(&mut self, event: Event) -> bool {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                log::debug!("Store: updating event {} '{}'", event.id, event.title);
                *slot = event;
                true
            }
            None => {
                log::debug!("Store: update ignored, event {} not found", event.id);
                false
            }
        }
    }

    pub fn delete_event(&mut self, id: EntityId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;
        if !removed {
            log::debug!("Store: delete ignored, event {} not found", id);
        }
        removed
    }

    /// Store the grade typed into the record-grade dialog and return it.
    ///
    /// The input is free text with no range check and a comma reads as a
    /// decimal point. Blank input clears the grade. Anything else that is not
    /// a number is refused and the recorded grade stays as it was.
    pub fn record_grade(&mut self, id: EntityId, input: &str) -> Result<Option<f64>, GradeError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(GradeError::EventNotFound(id))?;

        let trimmed = input.trim();
        let score = if trimmed.is_empty() {
            None
        } else {
            let parsed = trimmed.replace(',', ".").parse::<f64>().ok().filter(|s| s.is_finite());
            Some(parsed.ok_or_else(|| GradeError::NotANumber(trimmed.to_string()))?)
        };

        log::debug!("Store: event {} grade {:?} -> {:?}", id, event.grade, score);
        event.grade = score;
        Ok(score)
    }

    pub fn record_attendance(&mut self, id: EntityId, attended: bool) -> bool {
        self.with_event(id, |event| event.attendance = Some(attended))
    }

    /// Flip the completion flag ("mark as submitted").
    pub fn toggle_completed(&mut self, id: EntityId) -> bool {
        self.with_event(id, |event| event.completed = !event.completed)
    }

    /// Display name of the subject an event belongs to. Events whose subject
    /// was deleted get a placeholder; events never linked to one get `None`.
    pub fn subject_label_for(&self, event: &Event) -> Option<String> {
        let subject_id = event.subject_id?;
        Some(match self.subject(subject_id) {
            Some(subject) => subject.name.clone(),
            None => SUBJECT_REMOVED_PLACEHOLDER.to_string(),
        })
    }

    fn with_event(&mut self, id: EntityId, apply: impl FnOnce(&mut Event)) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                apply(event);
                true
            }
            None => false,
        }
    }
}
