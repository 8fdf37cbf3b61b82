//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod form;
pub mod header;
pub mod list;
pub mod tab_bar;

pub use dialog_component::DialogComponent;
pub use form::{FieldKind, FormEvent, FormField, FormState};
pub use header::Header;
pub use tab_bar::TabBar;
