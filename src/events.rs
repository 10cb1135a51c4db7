//! Event System
//!
//! Types and implementations for diagnostic events surfaced in the activity log.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The dashboard section a diagnostic event relates to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Section {
    /// Session-level events (login, config persistence).
    Session,
    /// The three-card enrollment/topic/entry summary.
    #[strum(serialize = "User stats")]
    Stats,
    #[strum(serialize = "My courses")]
    MyCourses,
    #[strum(serialize = "Recent activity")]
    RecentActivity,
    #[strum(serialize = "Newest courses")]
    NewestCourses,
    #[strum(serialize = "Active discussions")]
    ActiveDiscussions,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub section: Section,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(section: Section, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            section,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    /// A failed data fetch. Recorded to the diagnostic channel only; the
    /// affected section stays in its loading placeholder.
    pub fn fetch_error(section: Section, msg: String, log_level: LogLevel) -> Self {
        Self::new(section, msg, EventType::Error, log_level)
    }

    /// A session-level event (login outcome, config file I/O).
    pub fn session_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Section::Session, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.section, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_events_at_error_level_always_display() {
        let event = Event::fetch_error(Section::Stats, "boom".to_string(), LogLevel::Error);
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_section_name() {
        let event = Event::fetch_error(
            Section::ActiveDiscussions,
            "HTTP error with status 500".to_string(),
            LogLevel::Warn,
        );
        let rendered = format!("{}", event);
        assert!(rendered.contains("Active discussions"));
        assert!(rendered.contains("HTTP error with status 500"));
    }
}
