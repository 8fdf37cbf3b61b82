//! Utility modules for the School Planner application.
//!
//! - [`datetime`] - Date parsing, formatting and relative labels

pub mod datetime;
