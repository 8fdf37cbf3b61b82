//! Core UI functionality for the School Planner application.
//!
//! This module contains the fundamental building blocks for the user interface.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions produced by screens and dialogs
//! - [`component`] - Base component trait shared by screens
//! - [`event_handler`] - Terminal event polling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and read the [`Session`](crate::session::Session)
//! 2. **Actions** describe what a key press asked for
//! 3. The app component applies actions to the session and re-renders

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
