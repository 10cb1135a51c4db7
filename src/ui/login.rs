//! Login screen module
//!
//! Input buffers and rendering for the unauthenticated state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Which input field currently receives keystrokes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Field {
    #[default]
    Username,
    Password,
}

/// State of the login form: the two input buffers, the focused field, the
/// last failure message, and whether a submission is in flight.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: Field,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            Field::Username => self.username.push(c),
            Field::Password => self.password.push(c),
        }
    }

    /// Removes the last character from the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            Field::Username => {
                self.username.pop();
            }
            Field::Password => {
                self.password.pop();
            }
        }
    }

    /// Moves focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Username => Field::Password,
            Field::Password => Field::Username,
        };
    }

    /// Marks the form as submitting and returns the credentials to send.
    /// Returns `None` if a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<(String, String)> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some((self.username.clone(), self.password.clone()))
    }

    /// Records a rejected submission, re-enabling the form.
    pub fn fail_submit(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}

/// Renders the login screen: a centered form with username/password inputs,
/// the failure message if any, and key hints.
pub fn render_login(f: &mut Frame, form: &LoginForm) {
    let area = centered_rect(50, 12, f.area());

    let block = Block::default()
        .title("Login")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1), // error line
            Constraint::Length(1),
            Constraint::Length(1), // username
            Constraint::Length(1),
            Constraint::Length(1), // password
            Constraint::Length(1),
            Constraint::Length(1), // hints
        ])
        .split(area);

    if let Some(error) = &form.error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(error_line, inner[0]);
    }

    f.render_widget(
        input_line("Username", &form.username, form.focus == Field::Username),
        inner[2],
    );
    let masked: String = "*".repeat(form.password.chars().count());
    f.render_widget(
        input_line("Password", &masked, form.focus == Field::Password),
        inner[4],
    );

    let hint_text = if form.submitting {
        "Logging in..."
    } else {
        "Enter: login | Tab: switch field | Esc: quit"
    };
    let hints = Paragraph::new(Line::from(Span::styled(
        hint_text,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hints, inner[6]);
}

fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { "" };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::raw(format!("{}{}", value, cursor)),
    ]))
}

/// Returns a rect of the given size centered in the area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Characters go to the focused field, and Tab switches fields.
    fn test_typing_follows_focus() {
        let mut form = LoginForm::default();
        form.insert_char('a');
        form.insert_char('l');
        assert_eq!(form.username, "al");
        assert_eq!(form.password, "");

        form.toggle_focus();
        form.insert_char('p');
        form.insert_char('w');
        form.backspace();
        assert_eq!(form.username, "al");
        assert_eq!(form.password, "p");
    }

    #[test]
    // Submitting yields the credentials once; a second submit while in
    // flight is refused.
    fn test_begin_submit_guards_inflight_request() {
        let mut form = LoginForm::default();
        form.username = "alice".to_string();
        form.password = "secret".to_string();
        form.error = Some("Invalid credentials".to_string());

        let creds = form.begin_submit();
        assert_eq!(creds, Some(("alice".to_string(), "secret".to_string())));
        assert!(form.submitting);
        assert!(form.error.is_none(), "submitting clears the old error");

        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    // A rejection re-enables the form and stores the message verbatim.
    fn test_fail_submit_stores_message() {
        let mut form = LoginForm::default();
        form.begin_submit();
        form.fail_submit("Invalid credentials".to_string());
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
    }
}
