//! Layout management and calculations

use crate::constants::{HEADER_HEIGHT, HINT_BAR_HEIGHT, TAB_BAR_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of one application frame, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub hints: Rect,
    /// Present only on views that show the tab bar
    pub tab_bar: Option<Rect>,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the terminal into header, body, hint line and optional tab bar
    #[must_use]
    pub fn screen_layout(area: Rect, show_tab_bar: bool) -> ScreenAreas {
        let tab_height = if show_tab_bar { TAB_BAR_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(HINT_BAR_HEIGHT),
                Constraint::Length(tab_height),
            ])
            .split(area);

        ScreenAreas {
            header: chunks[0],
            body: chunks[1],
            hints: chunks[2],
            tab_bar: show_tab_bar.then_some(chunks[3]),
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Stack `count` rows of `row_height` lines from the top of `area`,
    /// dropping rows that do not fit
    #[must_use]
    pub fn form_rows(area: Rect, count: usize, row_height: u16) -> Vec<Rect> {
        (0..count)
            .map(|i| {
                let offset = row_height.saturating_mul(i as u16);
                Rect::new(area.x, area.y.saturating_add(offset), area.width, row_height)
            })
            .filter(|row| row.bottom() <= area.bottom())
            .collect()
    }
}
