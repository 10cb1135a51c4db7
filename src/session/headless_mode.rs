//! Headless mode execution
//!
//! Fetches the five dashboard sections concurrently and prints a one-shot
//! text snapshot, without entering the TUI.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::api::StatsApi;
use crate::api::error::ApiError;
use crate::events::{Event, Section};
use std::error::Error;

/// Runs the application in headless mode
///
/// Requires a stored session identifier. The five fetches are issued
/// concurrently; a failed section prints a placeholder and its failure is
/// reported as a diagnostic line, without affecting the other sections.
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - No stored session was found
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let user_id = session.stored_user_id.ok_or(
        "No stored session. Run `courseboard login` or `courseboard start` first.",
    )?;

    print_session_starting("headless");
    println!("User: {} | Environment: {}", user_id, session.environment);

    let api = session.api;
    let (stats, my_courses, recent_activity, newest_courses, active_discussions) = tokio::join!(
        api.user_stats(&user_id),
        api.my_courses(&user_id),
        api.recent_activity(&user_id),
        api.newest_courses(),
        api.active_discussions(),
    );

    match stats {
        Ok(stats) => {
            println!();
            println!("Courses Enrolled: {}", stats.enrollment_count);
            println!("Topics Posted:    {}", stats.topic_count);
            println!("Entries Posted:   {}", stats.entry_count);
        }
        Err(e) => print_section_failure(Section::Stats, &e),
    }

    println!();
    println!("My Courses:");
    match my_courses {
        Ok(courses) => {
            for course in &courses {
                println!(
                    "  {} ({}) - {}",
                    course.course_name, course.course_code, course.enrollment_type
                );
            }
        }
        Err(e) => print_section_failure(Section::MyCourses, &e),
    }

    println!();
    println!("Recent Activity:");
    match recent_activity {
        Ok(entries) => {
            for entry in &entries {
                println!(
                    "  {} - {} ({})",
                    entry.topic_title, entry.entry_content, entry.entry_created_at
                );
            }
        }
        Err(e) => print_section_failure(Section::RecentActivity, &e),
    }

    println!();
    println!("Newest Courses:");
    match newest_courses {
        Ok(courses) => {
            for course in &courses {
                println!("  {} - {}", course.course_name, course.course_code);
            }
        }
        Err(e) => print_section_failure(Section::NewestCourses, &e),
    }

    println!();
    println!("Active Discussions:");
    match active_discussions {
        Ok(discussions) => {
            for discussion in &discussions {
                println!(
                    "  {} - {}",
                    discussion.topic_title, discussion.entry_created_at
                );
            }
        }
        Err(e) => print_section_failure(Section::ActiveDiscussions, &e),
    }

    println!();
    print_session_exit_success();

    Ok(())
}

fn print_section_failure(section: Section, error: &ApiError) {
    println!("  (unavailable)");
    let event = Event::fetch_error(
        section,
        format!("Fetch failed: {}", error),
        error.log_level(),
    );
    if event.should_display() {
        eprintln!("{}", event);
    }
}
