//! Session setup and initialization

use crate::api::ApiClient;
use crate::config::Config;
use crate::environment::Environment;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// The environment to connect to
    pub environment: Environment,
    /// Where the session identifier is persisted
    pub config_path: PathBuf,
    /// Stats API client
    pub api: Arc<ApiClient>,
    /// Session identifier restored from the config file, if any
    pub stored_user_id: Option<String>,
}

/// Sets up a session for either execution mode: creates the API client and
/// restores the persisted session identifier, if one exists.
pub fn setup_session(environment: Environment, config_path: &Path) -> SessionData {
    let stored_user_id = if config_path.exists() {
        Config::load_from_file(config_path)
            .ok()
            .map(|config| config.user_id)
    } else {
        None
    };

    SessionData {
        environment,
        config_path: config_path.to_path_buf(),
        api: Arc::new(ApiClient::new(environment)),
        stored_user_id,
    }
}
