//! Dialog rendering helpers used by the dialog component.

pub mod common;
pub mod record_dialogs;
pub mod system_dialogs;
