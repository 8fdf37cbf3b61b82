use super::common::create_dialog_block;
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Key reference shown by the help dialog
pub const HELP_TEXT: &str = "\
GLOBAL
  1 / 2 / 3      Home / Subjects / Profile tab
  Left / Right   Previous / next tab (top-level views)
  Esc            Back
  ?              This help
  G              Logs
  q, Ctrl+C      Quit

LISTS
  Up / Down      Move selection (also k / j)
  Enter          Open
  a              Add

DETAILS
  e              Edit
  g              Record grade (assignments)
  t              Record attendance (classes)
  m              Mark as submitted (other events)

FORMS
  Tab / Down     Next field
  Shift+Tab / Up Previous field
  Left / Right   Change subject (event form)
  Enter          Save
  Ctrl+D         Delete (edit mode)

PROFILE
  p              Change password
  l              Log out";

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 10, area);
    render_message_dialog(
        f,
        dialog_area,
        "Error",
        Color::Red,
        message,
        "Press any key to continue",
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    render_message_dialog(
        f,
        dialog_area,
        "Info",
        Color::Blue,
        message,
        "Press any key to continue",
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    render_message_dialog(
        f,
        dialog_area,
        DIALOG_TITLE_HELP,
        Color::Yellow,
        HELP_TEXT,
        "j/k to scroll",
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(90, 80, area);
    let content = if logs.is_empty() {
        "No log entries yet".to_string()
    } else {
        logs.join("\n")
    };
    render_message_dialog(
        f,
        dialog_area,
        DIALOG_TITLE_LOGS,
        Color::Magenta,
        &content,
        "j/k to scroll",
        scroll_offset,
        scrollbar_state,
    );
}

/// Bordered, scrollable text dialog with an instruction line at the bottom
#[allow(clippy::too_many_arguments)]
fn render_message_dialog(
    f: &mut Frame,
    dialog_area: Rect,
    title: &str,
    color: Color,
    message: &str,
    instructions: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    f.render_widget(Clear, dialog_area);
    let block = create_dialog_block(title, color);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;
    let overflowing = total_lines > visible_height;

    let message_text = if overflowing {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = scroll_offset.min(max_scroll);

        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        lines
            .iter()
            .skip(clamped_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    let instructions_paragraph = Paragraph::new(instructions.to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflowing {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }
}
