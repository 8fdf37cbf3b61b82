//! In-memory entity store for subjects and events
//!
//! The store exclusively owns both collections. Every mutation is best-effort:
//! updates and deletes aimed at an id that does not exist return `false` and
//! leave the collections untouched instead of failing.
//!
//! - [`store`] - the [`EntityStore`] itself and read access
//! - [`subjects`] - subject create/update/delete/lookup
//! - [`events`] - event create/update/delete plus grade, attendance and completion
//! - [`ids`] - fresh id generation
//! - [`seed`] - mock data every session starts from

pub mod events;
pub mod ids;
pub mod seed;
pub mod store;
pub mod subjects;

pub use events::GradeError;
pub use ids::IdGenerator;
pub use store::EntityStore;
