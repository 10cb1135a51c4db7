//! Error handling for the Stats API module

use crate::logging::LogLevel;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

/// Error body shape returned by the Stats API, e.g. `{"message": "Invalid credentials"}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());
        let message = extract_message(&body).unwrap_or(body);

        ApiError::Http { status, message }
    }

    /// The string surfaced on the login form for this failure: the
    /// server-provided message on rejection, "Network error" on transport
    /// failure.
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Reqwest(_) => "Network error".to_string(),
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Http { .. } => "Login failed".to_string(),
        }
    }

    /// Classifies a fetch failure for the diagnostic channel.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Non-critical: temporary server issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: auth failures
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

            ApiError::Http { .. } => LogLevel::Warn,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

/// Pulls the `message` field out of a JSON error body, if it has one.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_from_json_body() {
        assert_eq!(
            extract_message(r#"{"message": "Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(extract_message("plain text error"), None);
        assert_eq!(extract_message(r#"{"other": "field"}"#), None);
    }

    #[test]
    fn test_login_message_surfaces_server_message() {
        let err = ApiError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.login_message(), "Invalid credentials");
    }

    #[test]
    fn test_login_message_falls_back_when_body_empty() {
        let err = ApiError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.login_message(), "Login failed");
    }

    #[tokio::test]
    // A transport failure surfaces the fixed "Network error" string on the
    // login form, never the underlying reqwest message.
    async fn test_login_message_on_transport_failure() {
        // Bind an ephemeral port, then drop the listener so nothing answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = reqwest::get(format!("http://127.0.0.1:{}/login", port))
            .await
            .expect_err("connection should be refused");
        let err = ApiError::from(err);
        assert!(matches!(err, ApiError::Reqwest(_)));
        assert_eq!(err.login_message(), "Network error");
    }

    #[test]
    fn test_log_level_classification() {
        let rate_limited = ApiError::Http {
            status: 429,
            message: String::new(),
        };
        assert_eq!(rate_limited.log_level(), LogLevel::Debug);

        let server_error = ApiError::Http {
            status: 503,
            message: String::new(),
        };
        assert_eq!(server_error.log_level(), LogLevel::Warn);

        let unauthorized = ApiError::Http {
            status: 401,
            message: String::new(),
        };
        assert_eq!(unauthorized.log_level(), LogLevel::Error);
    }
}
