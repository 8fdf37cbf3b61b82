//! Title bar drawn above every screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct Header;

impl Header {
    /// Render the title, a back marker when the view has one, and `right` on
    /// the right-hand side (clock or signed-in user)
    pub fn render(f: &mut Frame, area: Rect, title: &str, show_back: bool, right: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(10), Constraint::Min(0), Constraint::Length(24)])
            .split(inner);

        if show_back {
            let back = Paragraph::new(Line::from(vec![
                Span::styled("← ", Style::default().fg(Color::Yellow)),
                Span::styled("Esc", Style::default().fg(Color::Gray)),
            ]));
            f.render_widget(back, chunks[0]);
        }

        let title = Paragraph::new(title.to_string())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[1]);

        let right = Paragraph::new(right.to_string())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        f.render_widget(right, chunks[2]);
    }
}
