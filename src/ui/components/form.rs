//! Field-by-field text entry shared by the form screens.

use crate::ui::components::dialogs::common::{create_input_paragraph, create_selection_paragraph};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Height of one rendered field, borders included
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    /// Rendered as bullets
    Secret,
    /// One of a fixed list of options, cycled with Left/Right
    Choice { options: Vec<String>, selected: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn secret(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            kind: FieldKind::Secret,
        }
    }

    pub fn choice(label: &'static str, options: Vec<String>, selected: usize) -> Self {
        let selected = selected.min(options.len().saturating_sub(1));
        Self {
            label,
            value: String::new(),
            kind: FieldKind::Choice { options, selected },
        }
    }
}

/// What a key press did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
    Changed,
    /// The form has no use for the key; the screen may handle it
    Unhandled,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: Vec<FormField>,
    focused: usize,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Text of field `index`, empty when out of range
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|field| field.value.as_str()).unwrap_or_default()
    }

    /// Selected option of a choice field
    pub fn selected(&self, index: usize) -> Option<usize> {
        match self.fields.get(index).map(|field| &field.kind) {
            Some(FieldKind::Choice { selected, .. }) => Some(*selected),
            _ => None,
        }
    }

    /// Clear every text value and focus the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Enter => FormEvent::Submit,
            KeyCode::Esc => FormEvent::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormEvent::Changed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                FormEvent::Changed
            }
            code => self.edit_focused(code, key.modifiers),
        }
    }

    fn edit_focused(&mut self, code: KeyCode, modifiers: KeyModifiers) -> FormEvent {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return FormEvent::Unhandled;
        };

        match (&mut field.kind, code) {
            (FieldKind::Choice { options, selected }, KeyCode::Right) if !options.is_empty() => {
                *selected = (*selected + 1) % options.len();
                FormEvent::Changed
            }
            (FieldKind::Choice { options, selected }, KeyCode::Left) if !options.is_empty() => {
                *selected = (*selected + options.len() - 1) % options.len();
                FormEvent::Changed
            }
            (FieldKind::Choice { .. }, _) => FormEvent::Unhandled,
            (_, KeyCode::Char(_)) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                FormEvent::Unhandled
            }
            (_, KeyCode::Char(c)) => {
                field.value.push(c);
                FormEvent::Changed
            }
            (_, KeyCode::Backspace) => {
                field.value.pop();
                FormEvent::Changed
            }
            _ => FormEvent::Unhandled,
        }
    }

    /// Draw the fields top to bottom. Fields that do not fit are skipped.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let rows = LayoutManager::form_rows(area, self.fields.len(), FIELD_HEIGHT);
        for (index, (field, row)) in self.fields.iter().zip(rows).enumerate() {
            let focused = index == self.focused;
            match &field.kind {
                FieldKind::Text => f.render_widget(create_input_paragraph(&field.value, field.label, focused, false), row),
                FieldKind::Secret => f.render_widget(create_input_paragraph(&field.value, field.label, focused, true), row),
                FieldKind::Choice { options, selected } => {
                    let value = options.get(*selected).cloned().unwrap_or_default();
                    f.render_widget(create_selection_paragraph(value, field.label, focused), row);
                }
            }
        }
    }
}
