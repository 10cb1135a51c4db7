//! Dashboard Runtime
//!
//! Spawns the background tasks that talk to the Stats API: a login task per
//! submitted form, and five independent fetch tasks per authentication event.
//! Tasks deliver results over an mpsc update channel and report failures on
//! the diagnostic event channel. Nothing is retried and nothing is cancelled;
//! a stale result is discarded by the UI through its session tag.

use crate::api::StatsApi;
use crate::api::models::{ActivityEntry, Course, Discussion, NewCourse, StatsSummary};
use crate::events::{Event, Section};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A state change produced by a background task.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// The login endpoint accepted the credentials.
    LoginSucceeded { user_id: String },
    /// The login endpoint rejected the credentials, or the request failed.
    /// The message is the string to surface on the login form.
    LoginFailed { message: String },
    /// One dashboard section finished loading.
    Section(SectionUpdate),
}

/// A completed fetch, tagged with the session it was issued for. The UI
/// discards updates whose tag no longer matches the displayed session.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionUpdate {
    pub session: String,
    pub data: SectionData,
}

/// Payload of a completed fetch. Each variant replaces its section wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    Stats(StatsSummary),
    MyCourses(Vec<Course>),
    RecentActivity(Vec<ActivityEntry>),
    NewestCourses(Vec<NewCourse>),
    ActiveDiscussions(Vec<Discussion>),
}

/// Spawns a task that submits credentials to the login endpoint and reports
/// the outcome on the update channel.
pub fn spawn_login(
    api: Arc<dyn StatsApi>,
    username: String,
    password: String,
    update_sender: mpsc::Sender<Update>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let update = match api.login(&username, &password).await {
            Ok(user_id) => Update::LoginSucceeded { user_id },
            Err(e) => Update::LoginFailed {
                message: e.login_message(),
            },
        };
        let _ = update_sender.send(update).await;
    })
}

/// Issues the five dashboard fetches for the given session.
///
/// The fetches are independent and unordered; each task sends its section's
/// data on success and a diagnostic event on failure. A failure in one never
/// blocks or rolls back the others.
pub fn start_dashboard_fetches(
    user_id: String,
    api: Arc<dyn StatsApi>,
    update_sender: mpsc::Sender<Update>,
    event_sender: mpsc::Sender<Event>,
) -> Vec<JoinHandle<()>> {
    let mut join_handles = Vec::new();

    // User stats
    {
        let api = api.clone();
        let user_id = user_id.clone();
        let update_sender = update_sender.clone();
        let event_sender = event_sender.clone();
        join_handles.push(tokio::spawn(async move {
            let result = api.user_stats(&user_id).await.map(SectionData::Stats);
            deliver(Section::Stats, user_id, result, update_sender, event_sender).await;
        }));
    }

    // My courses
    {
        let api = api.clone();
        let user_id = user_id.clone();
        let update_sender = update_sender.clone();
        let event_sender = event_sender.clone();
        join_handles.push(tokio::spawn(async move {
            let result = api.my_courses(&user_id).await.map(SectionData::MyCourses);
            deliver(
                Section::MyCourses,
                user_id,
                result,
                update_sender,
                event_sender,
            )
            .await;
        }));
    }

    // Recent activity
    {
        let api = api.clone();
        let user_id = user_id.clone();
        let update_sender = update_sender.clone();
        let event_sender = event_sender.clone();
        join_handles.push(tokio::spawn(async move {
            let result = api
                .recent_activity(&user_id)
                .await
                .map(SectionData::RecentActivity);
            deliver(
                Section::RecentActivity,
                user_id,
                result,
                update_sender,
                event_sender,
            )
            .await;
        }));
    }

    // Newest courses (site-wide)
    {
        let api = api.clone();
        let user_id = user_id.clone();
        let update_sender = update_sender.clone();
        let event_sender = event_sender.clone();
        join_handles.push(tokio::spawn(async move {
            let result = api.newest_courses().await.map(SectionData::NewestCourses);
            deliver(
                Section::NewestCourses,
                user_id,
                result,
                update_sender,
                event_sender,
            )
            .await;
        }));
    }

    // Active discussions (site-wide)
    {
        let update_sender = update_sender.clone();
        let event_sender = event_sender.clone();
        join_handles.push(tokio::spawn(async move {
            let result = api
                .active_discussions()
                .await
                .map(SectionData::ActiveDiscussions);
            deliver(
                Section::ActiveDiscussions,
                user_id,
                result,
                update_sender,
                event_sender,
            )
            .await;
        }));
    }

    join_handles
}

/// Sends a completed fetch as a tagged section update, or its failure as a
/// diagnostic event.
async fn deliver(
    section: Section,
    session: String,
    result: Result<SectionData, crate::api::error::ApiError>,
    update_sender: mpsc::Sender<Update>,
    event_sender: mpsc::Sender<Event>,
) {
    match result {
        Ok(data) => {
            let _ = update_sender
                .send(Update::Section(SectionUpdate { session, data }))
                .await;
        }
        Err(e) => {
            let event = Event::fetch_error(section, format!("Fetch failed: {}", e), e.log_level());
            let _ = event_sender.send(event).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockStatsApi;
    use crate::api::error::ApiError;
    use crate::events::EventType;
    use std::time::Duration;

    fn stats_fixture() -> StatsSummary {
        StatsSummary {
            enrollment_count: 3,
            topic_count: 5,
            entry_count: 12,
        }
    }

    /// A mock API where all five endpoints succeed, each expected exactly once
    /// with the given user id on the user-scoped paths.
    fn healthy_mock(user_id: &'static str) -> MockStatsApi {
        let mut mock = MockStatsApi::new();
        mock.expect_user_stats()
            .withf(move |id| id == user_id)
            .times(1)
            .returning(|_| Ok(stats_fixture()));
        mock.expect_my_courses()
            .withf(move |id| id == user_id)
            .times(1)
            .returning(|_| Ok(vec![]));
        mock.expect_recent_activity()
            .withf(move |id| id == user_id)
            .times(1)
            .returning(|_| Ok(vec![]));
        mock.expect_newest_courses().times(1).returning(|| Ok(vec![]));
        mock.expect_active_discussions()
            .times(1)
            .returning(|| Ok(vec![]));
        mock
    }

    #[tokio::test]
    // All five endpoints should be fetched exactly once, and each update
    // should carry the session tag of the issuing user.
    async fn test_fetches_each_endpoint_once() {
        let api: Arc<dyn StatsApi> = Arc::new(healthy_mock("42"));
        let (update_sender, mut update_receiver) = mpsc::channel(16);
        let (event_sender, _event_receiver) = mpsc::channel(16);

        let handles =
            start_dashboard_fetches("42".to_string(), api, update_sender, event_sender);
        for handle in handles {
            handle.await.unwrap();
        }

        let mut updates = Vec::new();
        while let Ok(update) = update_receiver.try_recv() {
            updates.push(update);
        }
        assert_eq!(updates.len(), 5);
        for update in &updates {
            match update {
                Update::Section(section_update) => assert_eq!(section_update.session, "42"),
                other => panic!("Unexpected update: {:?}", other),
            }
        }
        // Mock expectations verify each endpoint was hit exactly once.
    }

    #[tokio::test]
    // A failed fetch should produce a diagnostic event, not a section update,
    // and must not affect the other four sections.
    async fn test_failed_fetch_is_logged_and_isolated() {
        let mut mock = MockStatsApi::new();
        mock.expect_user_stats().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        });
        mock.expect_my_courses().times(1).returning(|_| Ok(vec![]));
        mock.expect_recent_activity()
            .times(1)
            .returning(|_| Ok(vec![]));
        mock.expect_newest_courses().times(1).returning(|| Ok(vec![]));
        mock.expect_active_discussions()
            .times(1)
            .returning(|| Ok(vec![]));

        let api: Arc<dyn StatsApi> = Arc::new(mock);
        let (update_sender, mut update_receiver) = mpsc::channel(16);
        let (event_sender, mut event_receiver) = mpsc::channel(16);

        let handles =
            start_dashboard_fetches("7".to_string(), api, update_sender, event_sender);
        for handle in handles {
            handle.await.unwrap();
        }

        let mut updates = Vec::new();
        while let Ok(update) = update_receiver.try_recv() {
            updates.push(update);
        }
        assert_eq!(updates.len(), 4);
        assert!(
            !updates.iter().any(|u| matches!(
                u,
                Update::Section(SectionUpdate {
                    data: SectionData::Stats(_),
                    ..
                })
            )),
            "Failed stats fetch should not deliver a section update"
        );

        let event = event_receiver.try_recv().expect("expected a fetch error event");
        assert_eq!(event.section, Section::Stats);
        assert_eq!(event.event_type, EventType::Error);
    }

    #[tokio::test]
    // A successful login should deliver the returned session identifier.
    async fn test_spawn_login_success() {
        let mut mock = MockStatsApi::new();
        mock.expect_login()
            .withf(|username, password| username == "alice" && password == "secret")
            .times(1)
            .returning(|_, _| Ok("42".to_string()));

        let api: Arc<dyn StatsApi> = Arc::new(mock);
        let (update_sender, mut update_receiver) = mpsc::channel(1);

        spawn_login(api, "alice".to_string(), "secret".to_string(), update_sender)
            .await
            .unwrap();

        let update = tokio::time::timeout(Duration::from_secs(1), update_receiver.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            update,
            Update::LoginSucceeded {
                user_id: "42".to_string()
            }
        );
    }

    #[tokio::test]
    // A rejected login should surface the server-provided message verbatim.
    async fn test_spawn_login_rejection_surfaces_server_message() {
        let mut mock = MockStatsApi::new();
        mock.expect_login().times(1).returning(|_, _| {
            Err(ApiError::Http {
                status: 401,
                message: "Invalid credentials".to_string(),
            })
        });

        let api: Arc<dyn StatsApi> = Arc::new(mock);
        let (update_sender, mut update_receiver) = mpsc::channel(1);

        spawn_login(api, "alice".to_string(), "wrong".to_string(), update_sender)
            .await
            .unwrap();

        let update = update_receiver.recv().await.unwrap();
        assert_eq!(
            update,
            Update::LoginFailed {
                message: "Invalid credentials".to_string()
            }
        );
    }
}
