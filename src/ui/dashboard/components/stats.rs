//! Dashboard summary cards component
//!
//! Renders the three per-user summary cards. Each card shows "Loading..."
//! until the stats fetch completes.

use super::super::state::{DashboardState, SectionState};
use crate::api::models::StatsSummary;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const CARD_TITLES: [&str; 3] = ["Courses Enrolled", "Topics Posted", "Entries Posted"];

/// The three card values in display order, with the loading placeholder
/// before the stats response arrives.
pub fn card_values(stats: &SectionState<StatsSummary>) -> [String; 3] {
    match stats.loaded() {
        Some(stats) => [
            stats.enrollment_count.to_string(),
            stats.topic_count.to_string(),
            stats.entry_count.to_string(),
        ],
        None => [
            "Loading...".to_string(),
            "Loading...".to_string(),
            "Loading...".to_string(),
        ],
    }
}

/// Render the summary card row.
pub fn render_stat_cards(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let values = card_values(&state.stats);
    for (i, (title, value)) in CARD_TITLES.iter().zip(values.iter()).enumerate() {
        let value_style = if state.stats.is_loading() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        };
        let card = Paragraph::new(value.clone())
            .alignment(Alignment::Center)
            .style(value_style)
            .block(
                Block::default()
                    .title(*title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(card, card_chunks[i]);
    }
}
