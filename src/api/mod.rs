use crate::api::error::ApiError;
use crate::api::models::{ActivityEntry, Course, Discussion, NewCourse, StatsSummary};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod models;

#[cfg(test)]
use mockall::automock;

/// The Stats API consumed by the dashboard. Every operation is a single
/// request/response with no retry, pagination, or caching.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StatsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Exchange credentials for a session identifier.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    /// Per-user enrollment/topic/entry counts.
    async fn user_stats(&self, user_id: &str) -> Result<StatsSummary, ApiError>;

    /// Courses the user is enrolled in.
    async fn my_courses(&self, user_id: &str) -> Result<Vec<Course>, ApiError>;

    /// The user's recent discussion entries.
    async fn recent_activity(&self, user_id: &str) -> Result<Vec<ActivityEntry>, ApiError>;

    /// Site-wide newest courses.
    async fn newest_courses(&self) -> Result<Vec<NewCourse>, ApiError>;

    /// Site-wide discussions with recent entries.
    async fn active_discussions(&self) -> Result<Vec<Discussion>, ApiError>;
}
