//! School Planner - A terminal planner for students
//!
//! This library provides a terminal-based planner for class subjects,
//! scheduled events, grades and attendance. Data lives in memory for the
//! length of a session and is seeded with mock content at every login.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`entities`] - Plain data records (users, subjects, grades, events)
//! * [`storage`] - The in-memory entity store and its seed data
//! * [`navigation`] - View stack, selection context and view dispatch
//! * [`session`] - Per-login state tying store, selection and navigation together
//! * [`auth`] - Pluggable login check
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Utility functions and helpers

/// Login collaborator trait and the mock implementation
pub mod auth;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Domain records
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// View history, selection and dispatch
pub mod navigation;

/// Per-login application state
pub mod session;

/// In-memory entity store
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use session::Session;
