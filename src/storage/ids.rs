use crate::entities::EntityId;

/// Monotonic id source shared by subjects and events.
///
/// Ids are handed out in strictly increasing order and never reused for the
/// life of a store, so two creations in quick succession cannot collide.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: EntityId,
}

impl IdGenerator {
    /// Start right after `highest_taken`.
    pub fn after(highest_taken: EntityId) -> Self {
        Self {
            next: highest_taken.saturating_add(1),
        }
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::after(0)
    }
}
