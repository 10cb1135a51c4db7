//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Section;
use ratatui::prelude::Color;

/// Get a ratatui color for a diagnostic event based on its section
pub fn get_section_color(section: &Section) -> Color {
    match section {
        Section::Session => Color::Cyan,
        Section::Stats => Color::LightGreen,
        Section::MyCourses => Color::LightBlue,
        Section::RecentActivity => Color::LightYellow,
        Section::NewestCourses => Color::Green,
        Section::ActiveDiscussions => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-08-25 14:30:05"),
            "08-25 14:30"
        );
        // Unparseable input falls back unchanged
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
