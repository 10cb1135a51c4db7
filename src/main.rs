mod api;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod runtime;
mod session;
mod ui;

use crate::api::StatsApi;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Print a one-shot snapshot instead of opening the TUI.
        #[arg(long)]
        headless: bool,
    },
    /// Log in and persist the session identifier without opening the TUI.
    Login {
        /// Username to authenticate with.
        #[arg(long, value_name = "USERNAME")]
        username: String,

        /// Password to authenticate with.
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Clear the stored session identifier and logout.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("COURSEBOARD_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start { headless } => {
            let session = setup_session(environment, &config_path);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Login { username, password } => {
            let api = api::ApiClient::new(environment);
            match api.login(&username, &password).await {
                Ok(user_id) => {
                    let config = Config::new(user_id.clone());
                    config
                        .save(&config_path)
                        .map_err(|e| format!("Failed to save config: {}", e))?;
                    println!("Logged in as user {}.", user_id);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("{}", e.login_message());
                    Err(e.into())
                }
            }
        }
        Command::Logout => {
            println!("Logging out and clearing stored session...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
