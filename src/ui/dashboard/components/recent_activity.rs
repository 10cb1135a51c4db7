//! Recent Activity panel component
//!
//! Renders the user's recent discussion entries, one item per response
//! element in response order.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_recent_activity(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("RECENT ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = match state.recent_activity.loaded() {
        None => Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
        Some(entries) => {
            let lines: Vec<Line> = entries
                .iter()
                .map(|entry| {
                    Line::from(vec![
                        Span::styled(
                            entry.topic_title.clone(),
                            Style::default().fg(Color::LightYellow),
                        ),
                        Span::raw(" - "),
                        Span::raw(entry.entry_content.clone()),
                        Span::styled(
                            format!(" ({})", entry.entry_created_at),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                })
                .collect();
            Paragraph::new(lines)
        }
    };

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
