//! Wire types for the Stats API.
//!
//! Every record is flat, externally sourced, and replaced wholesale on each
//! fetch. Nothing here is mutated incrementally.

use serde::{Deserialize, Serialize};

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful response body from `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
}

/// Per-user summary counts shown on the three dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsSummary {
    pub enrollment_count: u64,
    pub topic_count: u64,
    pub entry_count: u64,
}

/// A course the user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Course {
    pub course_name: String,
    pub course_code: String,
    pub enrollment_type: String,
}

/// A recent discussion entry by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityEntry {
    pub topic_title: String,
    pub entry_content: String,
    pub entry_created_at: String,
}

/// A site-wide newly created course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCourse {
    pub course_name: String,
    pub course_code: String,
}

/// A site-wide discussion with recent entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Discussion {
    pub topic_title: String,
    pub entry_created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_summary_deserializes() {
        let json = r#"{"enrollment_count": 3, "topic_count": 5, "entry_count": 12}"#;
        let stats: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(
            stats,
            StatsSummary {
                enrollment_count: 3,
                topic_count: 5,
                entry_count: 12,
            }
        );
    }

    #[test]
    fn test_course_list_preserves_response_order() {
        let json = r#"[
            {"course_name": "Databases", "course_code": "DB201", "enrollment_type": "COURSE"},
            {"course_name": "Algorithms", "course_code": "ALG101", "enrollment_type": "PROGRAM"}
        ]"#;
        let courses: Vec<Course> = serde_json::from_str(json).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course_code, "DB201");
        assert_eq!(courses[1].course_code, "ALG101");
    }

    #[test]
    fn test_login_response_deserializes() {
        let json = r#"{"user_id": "42"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user_id, "42");
    }
}
