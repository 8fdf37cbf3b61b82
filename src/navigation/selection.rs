use crate::entities::EntityId;

/// The subject and event the current view is about.
///
/// Both slots are independent. They hold ids only and are never cleared
/// when the entity behind them is deleted, so readers must treat a failed
/// lookup as "nothing selected".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionContext {
    pub subject: Option<EntityId>,
    pub event: Option<EntityId>,
}

impl SelectionContext {
    pub fn select_subject(&mut self, id: Option<EntityId>) {
        self.subject = id;
    }

    pub fn select_event(&mut self, id: Option<EntityId>) {
        self.event = id;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
