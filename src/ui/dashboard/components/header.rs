//! Dashboard header component
//!
//! Renders the title line with environment and session information

use super::super::state::DashboardState;
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title, environment, and logged-in user.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("COURSEBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Staging => Color::Yellow,
        Environment::Local => Color::Magenta,
    };
    let uptime = state.start_time.elapsed();
    let uptime_string = format!(
        "Uptime: {}m {}s",
        uptime.as_secs() / 60,
        uptime.as_secs() % 60
    );
    let info = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("User: {}", state.user_id),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Env: {}", state.environment),
            Style::default().fg(env_color),
        ),
        Span::raw("   "),
        Span::styled(uptime_string, Style::default().fg(Color::LightGreen)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(info, header_chunks[1]);
}
