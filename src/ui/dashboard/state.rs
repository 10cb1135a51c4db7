//! Dashboard state management
//!
//! Holds the authenticated view: the session identifier plus five
//! independently loading sections, each replaced wholesale when its fetch
//! completes.

use crate::api::models::{ActivityEntry, Course, Discussion, NewCourse, StatsSummary};
use crate::consts::ui_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::SectionData;

use std::collections::VecDeque;
use std::time::Instant;

/// Load state of one dashboard section. There is no failed variant: a fetch
/// failure is reported on the diagnostic channel and the section stays here.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Loaded(T),
}

impl<T> SectionState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            SectionState::Loading => None,
            SectionState::Loaded(value) => Some(value),
        }
    }
}

/// State of the authenticated dashboard screen.
#[derive(Debug)]
pub struct DashboardState {
    /// Session identifier the displayed data belongs to.
    pub user_id: String,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Per-user summary counts for the three cards.
    pub stats: SectionState<StatsSummary>,
    /// Courses the user is enrolled in.
    pub my_courses: SectionState<Vec<Course>>,
    /// The user's recent discussion entries.
    pub recent_activity: SectionState<Vec<ActivityEntry>>,
    /// Site-wide newest courses.
    pub newest_courses: SectionState<Vec<NewCourse>>,
    /// Site-wide discussions with recent entries.
    pub active_discussions: SectionState<Vec<Discussion>>,
    /// Diagnostic events for display (bounded).
    pub activity_logs: VecDeque<Event>,
}

impl DashboardState {
    /// Creates a fresh dashboard state with every section loading.
    pub fn new(user_id: String, environment: Environment, start_time: Instant) -> Self {
        Self {
            user_id,
            environment,
            start_time,
            stats: SectionState::Loading,
            my_courses: SectionState::Loading,
            recent_activity: SectionState::Loading,
            newest_courses: SectionState::Loading,
            active_discussions: SectionState::Loading,
            activity_logs: VecDeque::new(),
        }
    }

    /// Applies a completed fetch, replacing the section wholesale.
    pub fn apply(&mut self, data: SectionData) {
        match data {
            SectionData::Stats(stats) => self.stats = SectionState::Loaded(stats),
            SectionData::MyCourses(courses) => self.my_courses = SectionState::Loaded(courses),
            SectionData::RecentActivity(entries) => {
                self.recent_activity = SectionState::Loaded(entries)
            }
            SectionData::NewestCourses(courses) => {
                self.newest_courses = SectionState::Loaded(courses)
            }
            SectionData::ActiveDiscussions(discussions) => {
                self.active_discussions = SectionState::Loaded(discussions)
            }
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
