use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block. The focused field gets a visual cursor and
/// a highlighted border; secret fields show one bullet per character.
pub fn create_input_paragraph<'a>(value: &str, field_title: &str, focused: bool, secret: bool) -> Paragraph<'a> {
    let shown = if secret {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let input_display = if focused { format!("{}█", shown) } else { shown };

    Paragraph::new(input_display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field block (read-only value cycled with arrows)
pub fn create_selection_paragraph(value: String, field_title: &str, focused: bool) -> Paragraph<'static> {
    let display = if focused { format!("◀ {} ▶", value) } else { value };
    Paragraph::new(display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (i, (key, color, desc)) in instructions.iter().enumerate() {
        if i > 0 {
            instruction_text.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across screens and dialogs
pub mod shortcuts {
    use super::*;

    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_BACK: InstructionShortcut = ("Esc", Color::Red, " Back");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_OPEN: InstructionShortcut = ("Enter", Color::Green, " Open");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ADD: InstructionShortcut = ("a", Color::Cyan, " Add");
    pub const EDIT: InstructionShortcut = ("e", Color::Cyan, " Edit");
    pub const DELETE: InstructionShortcut = ("Ctrl+D", Color::Red, " Delete");
    pub const TABS: InstructionShortcut = ("1-3", Color::Cyan, " Tabs");
    pub const HELP: InstructionShortcut = ("?", Color::Yellow, " Help");
    pub const QUIT: InstructionShortcut = ("q", Color::Red, " Quit");
}
