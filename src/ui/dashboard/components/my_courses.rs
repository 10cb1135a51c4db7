//! My Courses panel component
//!
//! Renders the user's enrolled courses as a table, one row per response
//! element in response order.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Row, Table};

pub fn render_my_courses(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("MY COURSES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    match state.my_courses.loaded() {
        None => {
            let placeholder = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
        }
        Some(courses) => {
            let rows: Vec<Row> = courses
                .iter()
                .map(|course| {
                    Row::new(vec![
                        course.course_name.clone(),
                        course.course_code.clone(),
                        course.enrollment_type.clone(),
                    ])
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(50),
                    Constraint::Percentage(25),
                    Constraint::Percentage(25),
                ],
            )
            .header(
                Row::new(vec!["Course Name", "Course Code", "Enrollment Type"]).style(
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                ),
            )
            .block(block);
            f.render_widget(table, area);
        }
    }
}
