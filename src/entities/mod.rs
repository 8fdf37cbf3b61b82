//! Domain entities held by the in-memory entity store.

pub mod event;
pub mod grade;
pub mod subject;
pub mod user;

pub use event::{Event, EventDraft, EventKind};
pub use grade::Grade;
pub use subject::{Subject, SubjectDraft};
pub use user::User;

/// Identifier shared by subjects, events and grades.
pub type EntityId = u64;
