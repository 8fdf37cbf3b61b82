use super::ids::IdGenerator;
use super::seed;
use crate::entities::{EntityId, Event, Subject};
use chrono::NaiveDate;

/// Owner of the subject and event collections.
#[derive(Debug, Clone)]
pub struct EntityStore {
    pub(crate) subjects: Vec<Subject>,
    pub(crate) events: Vec<Event>,
    pub(crate) ids: IdGenerator,
}

impl EntityStore {
    /// Store holding the given collections. The id generator starts above
    /// every id already present, grades included.
    pub fn new(subjects: Vec<Subject>, events: Vec<Event>) -> Self {
        let highest = subjects
            .iter()
            .flat_map(|s| std::iter::once(s.id).chain(s.grades.iter().map(|g| g.id)))
            .chain(events.iter().map(|e| e.id))
            .max()
            .unwrap_or(0);

        Self {
            subjects,
            events,
            ids: IdGenerator::after(highest),
        }
    }

    /// Store populated with the mock data, events scheduled on `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed::subjects(), seed::events(today))
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn subject(&self, id: EntityId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn event(&self, id: EntityId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events scheduled on `date`, in collection order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == Some(date)).collect()
    }

    /// Subject an event points at, if it still exists.
    pub fn subject_of(&self, event: &Event) -> Option<&Subject> {
        event.subject_id.and_then(|id| self.subject(id))
    }

    pub(crate) fn fresh_id(&mut self) -> EntityId {
        self.ids.next_id()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
