//! Selection bookkeeping for the list screens

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

/// Keep `selected` inside a list of `len` rows
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

pub fn next_index(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1).min(len - 1)
    }
}

pub fn previous_index(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Bordered list with the shared highlight style
pub fn styled_list<'a>(items: Vec<ListItem<'a>>, title: &'a str) -> List<'a> {
    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
}

/// Terminal color for a subject's color tag
pub fn subject_color(tag: &str) -> Color {
    match tag.trim().to_lowercase().as_str() {
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "blue" => Color::Blue,
        _ => Color::Gray,
    }
}
