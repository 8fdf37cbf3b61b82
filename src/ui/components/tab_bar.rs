//! Bottom tab bar for the top-level views

use crate::navigation::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

pub struct TabBar;

impl TabBar {
    pub fn render(f: &mut Frame, area: Rect, active: Tab) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.label())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(active.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider("│");

        f.render_widget(tabs, area);
    }
}
