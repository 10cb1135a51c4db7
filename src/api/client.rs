//! Stats API Client
//!
//! A client for the course Stats API, covering login and the five dashboard
//! read endpoints.

use crate::api::StatsApi;
use crate::api::error::ApiError;
use crate::api::models::{
    ActivityEntry, Course, Discussion, LoginRequest, LoginResponse, NewCourse, StatsSummary,
};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("courseboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl StatsApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post_json("login", &request).await?;
        Ok(response.user_id)
    }

    async fn user_stats(&self, user_id: &str) -> Result<StatsSummary, ApiError> {
        let user_path = urlencoding::encode(user_id).into_owned();
        self.get_json(&format!("user/{}/stats", user_path)).await
    }

    async fn my_courses(&self, user_id: &str) -> Result<Vec<Course>, ApiError> {
        let user_path = urlencoding::encode(user_id).into_owned();
        self.get_json(&format!("my_courses/{}", user_path)).await
    }

    async fn recent_activity(&self, user_id: &str) -> Result<Vec<ActivityEntry>, ApiError> {
        let user_path = urlencoding::encode(user_id).into_owned();
        self.get_json(&format!("recent_activity/{}", user_path))
            .await
    }

    async fn newest_courses(&self) -> Result<Vec<NewCourse>, ApiError> {
        self.get_json("newest_courses").await
    }

    async fn active_discussions(&self) -> Result<Vec<Discussion>, ApiError> {
        self.get_json("active_discussions").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_without_duplicate_slashes() {
        let client = ApiClient::new(Environment::Local);
        assert_eq!(
            client.build_url("/newest_courses"),
            "http://localhost:5000/newest_courses"
        );
        assert_eq!(
            client.build_url("user/42/stats"),
            "http://localhost:5000/user/42/stats"
        );
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live Stats API to run.
mod live_api_tests {
    use super::*;

    #[tokio::test]
    #[ignore] // This test requires a live Stats API instance.
    /// Should log in with the seeded development credentials.
    async fn test_login() {
        let client = ApiClient::new(Environment::Local);
        match client.login("alice", "password123").await {
            Ok(user_id) => println!("Logged in with user ID: {}", user_id),
            Err(e) => panic!("Failed to log in: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live Stats API instance.
    /// Should return the summary counts for a user.
    async fn test_user_stats() {
        let client = ApiClient::new(Environment::Local);
        let user_id = "1"; // Example user ID
        match client.user_stats(user_id).await {
            Ok(stats) => println!("Got stats: {:?}", stats),
            Err(e) => panic!("Failed to get stats: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live Stats API instance.
    /// Should return the site-wide newest courses.
    async fn test_newest_courses() {
        let client = ApiClient::new(Environment::Local);
        match client.newest_courses().await {
            Ok(courses) => println!("Got {} courses", courses.len()),
            Err(e) => panic!("Failed to get newest courses: {}", e),
        }
    }
}
