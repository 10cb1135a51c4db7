//! Site-wide feed panels
//!
//! Renders the newest courses and active discussions lists, one item per
//! response element in response order.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_newest_courses(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = feed_block("NEWEST COURSES");

    let paragraph = match state.newest_courses.loaded() {
        None => Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
        Some(courses) => {
            let lines: Vec<Line> = courses
                .iter()
                .map(|course| {
                    Line::from(vec![
                        Span::styled(
                            course.course_name.clone(),
                            Style::default().fg(Color::LightGreen),
                        ),
                        Span::raw(" - "),
                        Span::raw(course.course_code.clone()),
                    ])
                })
                .collect();
            Paragraph::new(lines)
        }
    };

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}

pub fn render_active_discussions(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
) {
    let block = feed_block("ACTIVE DISCUSSIONS");

    let paragraph = match state.active_discussions.loaded() {
        None => Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
        Some(discussions) => {
            let lines: Vec<Line> = discussions
                .iter()
                .map(|discussion| {
                    Line::from(vec![
                        Span::styled(
                            discussion.topic_title.clone(),
                            Style::default().fg(Color::LightYellow),
                        ),
                        Span::styled(
                            format!(" - {}", discussion.entry_created_at),
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

fn feed_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}
