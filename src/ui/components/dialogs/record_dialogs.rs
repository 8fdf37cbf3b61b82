use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::{DIALOG_TITLE_ATTENDANCE, DIALOG_TITLE_GRADE};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn render_grade_dialog(f: &mut Frame, area: Rect, event_title: &str, input_buffer: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 10, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(DIALOG_TITLE_GRADE, Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Event title
            Constraint::Length(3), // Score input
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let title = Paragraph::new(event_title.to_string())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    let input = create_input_paragraph(input_buffer, "Score", true, false);
    let instructions = create_instructions_paragraph(&[shortcuts::ENTER_SAVE, shortcuts::ESC_CANCEL]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(title, chunks[0]);
    f.render_widget(input, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}

pub fn render_attendance_dialog(f: &mut Frame, area: Rect, event_title: &str, attended: bool) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 9, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(DIALOG_TITLE_ATTENDANCE, Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(1), Constraint::Length(2), Constraint::Length(1)])
        .split(inner_area);

    let title = Paragraph::new(event_title.to_string())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    let (mark, color) = if attended {
        ("[x] Attended", Color::Green)
    } else {
        ("[ ] Attended", Color::Gray)
    };
    let toggle = Paragraph::new(mark)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    let instructions = create_instructions_paragraph(&[
        ("Space", Color::Cyan, " Toggle"),
        shortcuts::ENTER_SAVE,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(title, chunks[0]);
    f.render_widget(toggle, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}
