//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// View titles
pub const TITLE_LOGIN: &str = "SCHOOL PLANNER";
pub const TITLE_HOME: &str = "Today";
pub const TITLE_SUBJECTS: &str = "My Subjects";
pub const TITLE_SUBJECT_DETAIL: &str = "Subject Detail";
pub const TITLE_EVENT_DETAIL: &str = "Event Detail";
pub const TITLE_NEW_SUBJECT: &str = "Add Subject";
pub const TITLE_EDIT_SUBJECT: &str = "Edit Subject";
pub const TITLE_NEW_EVENT: &str = "New Event";
pub const TITLE_EDIT_EVENT: &str = "Edit Event";
pub const TITLE_PROFILE: &str = "Profile";
pub const TITLE_CHANGE_PASSWORD: &str = "Change Password";

// Placeholders
pub const SUBJECT_REMOVED_PLACEHOLDER: &str = "(subject removed)";
pub const NO_SUBJECT_PLACEHOLDER: &str = "(no subject)";
pub const NO_NOTES_PLACEHOLDER: &str = "No additional notes.";
pub const NO_GRADES_PLACEHOLDER: &str = "No grades recorded";
pub const NO_EVENTS_TODAY: &str = "Nothing scheduled for today";
pub const ITEM_REMOVED_PLACEHOLDER: &str = "This item no longer exists. Press Esc to go back.";

// Success Messages
pub const SUCCESS_SUBJECT_CREATED: &str = "✅ Subject created";
pub const SUCCESS_SUBJECT_UPDATED: &str = "✅ Subject updated";
pub const SUCCESS_SUBJECT_DELETED: &str = "✅ Subject deleted";
pub const SUCCESS_EVENT_CREATED: &str = "✅ Event created";
pub const SUCCESS_EVENT_UPDATED: &str = "✅ Event updated";
pub const SUCCESS_EVENT_DELETED: &str = "✅ Event deleted";
pub const SUCCESS_PASSWORD_CHANGED: &str = "✅ Password changed";
pub const SUCCESS_GRADE_RECORDED: &str = "✅ Grade recorded";
pub const SUCCESS_GRADE_CLEARED: &str = "✅ Grade cleared";
pub const SUCCESS_ATTENDANCE_RECORDED: &str = "✅ Attendance recorded";
pub const SUCCESS_STATUS_UPDATED: &str = "✅ Status updated";

// Warning Messages
pub const WARNING_ITEM_MISSING: &str = "⚠️ That item no longer exists";

// Error Messages
pub const ERROR_LOGIN_FAILED: &str = "❌ Login failed";
pub const ERROR_PASSWORD_CHANGE_FAILED: &str = "❌ Could not change password";
pub const ERROR_GRADE_REJECTED: &str = "❌ Grade not recorded";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_GRADE: &str = "Record Grade";
pub const DIALOG_TITLE_ATTENDANCE: &str = "Record Attendance";

// Navigation
/// Default number of frames kept in the view history
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 32;
/// Upper bound accepted for `ui.max_history_depth`
pub const MAX_HISTORY_DEPTH_LIMIT: usize = 256;

// UI Layout Constants
/// Height of the header bar in lines
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the bottom tab bar in lines
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Height of the key hint line
pub const HINT_BAR_HEIGHT: u16 = 1;
