//! Navigation core: which view is on screen, how the user got there, and
//! which subject/event the view is about.
//!
//! - [`view`] - view and tab identifiers
//! - [`selection`] - the focused subject/event ids
//! - [`stack`] - view history with single-step back and tab resets
//! - [`dispatcher`] - view id resolution and tab-bar visibility

pub mod dispatcher;
pub mod selection;
pub mod stack;
pub mod view;

pub use dispatcher::ViewDispatcher;
pub use selection::SelectionContext;
pub use stack::{NavigationFrame, NavigationStack};
pub use view::{Tab, ViewId};
