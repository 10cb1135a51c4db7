//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::StatsApi;
use crate::config::Config;
use crate::consts::ui_consts::{
    EVENT_QUEUE_SIZE, KEY_POLL_INTERVAL_MS, SPLASH_DURATION_MS, UPDATE_QUEUE_SIZE,
};
use crate::environment::Environment;
use crate::events::{Event as DiagnosticEvent, EventType};
use crate::logging::LogLevel;
use crate::runtime::{self, Update};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::login::{LoginForm, render_login};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Login screen where users can authenticate.
    Login(LoginForm),
    /// Dashboard screen displaying the authenticated overview.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// Where the session identifier is persisted.
    config_path: PathBuf,

    /// The Stats API collaborator.
    api: Arc<dyn StatsApi>,

    /// Session identifier restored from the config file, consumed when the
    /// splash screen ends.
    stored_user_id: Option<String>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Sender handed to background tasks for state updates.
    update_sender: mpsc::Sender<Update>,

    /// Receives state updates from background tasks.
    update_receiver: mpsc::Receiver<Update>,

    /// Sender handed to background tasks for diagnostic events.
    event_sender: mpsc::Sender<DiagnosticEvent>,

    /// Receives diagnostic events from background tasks.
    event_receiver: mpsc::Receiver<DiagnosticEvent>,

    /// Handles of spawned background tasks. Never aborted: logout does not
    /// cancel in-flight fetches, their results are discarded by session tag.
    background_handles: Vec<JoinHandle<()>>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        config_path: PathBuf,
        api: Arc<dyn StatsApi>,
        stored_user_id: Option<String>,
    ) -> Self {
        let (update_sender, update_receiver) = mpsc::channel(UPDATE_QUEUE_SIZE);
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            start_time: Instant::now(),
            environment,
            config_path,
            api,
            stored_user_id,
            current_screen: Screen::Splash,
            update_sender,
            update_receiver,
            event_sender,
            event_receiver,
            background_handles: Vec::new(),
        }
    }

    /// Transitions off the splash screen: to the dashboard if a session
    /// identifier was restored from the config file, else to the login form.
    fn leave_splash(&mut self) {
        match self.stored_user_id.take() {
            Some(user_id) => self.enter_dashboard(user_id),
            None => self.current_screen = Screen::Login(LoginForm::default()),
        }
    }

    /// Enters the authenticated state and issues the five dashboard fetches.
    fn enter_dashboard(&mut self, user_id: String) {
        let state = DashboardState::new(user_id.clone(), self.environment, self.start_time);
        self.current_screen = Screen::Dashboard(Box::new(state));
        let handles = runtime::start_dashboard_fetches(
            user_id,
            self.api.clone(),
            self.update_sender.clone(),
            self.event_sender.clone(),
        );
        self.background_handles.extend(handles);
    }

    /// Submits the login form, if one is showing and not already in flight.
    fn submit_login(&mut self) {
        if let Screen::Login(form) = &mut self.current_screen {
            if let Some((username, password)) = form.begin_submit() {
                let handle = runtime::spawn_login(
                    self.api.clone(),
                    username,
                    password,
                    self.update_sender.clone(),
                );
                self.background_handles.push(handle);
            }
        }
    }

    /// Clears the persisted session identifier and reverts to the login
    /// form. In-flight fetches are not cancelled; their tagged results no
    /// longer match any displayed session and will be discarded.
    fn logout(&mut self) {
        if let Err(e) = Config::clear(&self.config_path) {
            let _ = self.event_sender.try_send(DiagnosticEvent::session_with_level(
                format!("Failed to clear session file: {}", e),
                EventType::Error,
                LogLevel::Error,
            ));
        }
        self.current_screen = Screen::Login(LoginForm::default());
    }

    /// Applies a state update from a background task.
    fn apply_update(&mut self, update: Update) {
        match update {
            Update::LoginSucceeded { user_id } => {
                let config = Config::new(user_id.clone());
                if let Err(e) = config.save(&self.config_path) {
                    // The session proceeds either way; the failure is diagnostic only.
                    let _ = self.event_sender.try_send(DiagnosticEvent::session_with_level(
                        format!("Failed to persist session: {}", e),
                        EventType::Error,
                        LogLevel::Error,
                    ));
                }
                let _ = self.event_sender.try_send(DiagnosticEvent::session_with_level(
                    format!("Logged in as user {}", user_id),
                    EventType::Success,
                    LogLevel::Info,
                ));
                self.enter_dashboard(user_id);
            }
            Update::LoginFailed { message } => {
                if let Screen::Login(form) = &mut self.current_screen {
                    form.fail_submit(message);
                }
            }
            Update::Section(section_update) => {
                if let Screen::Dashboard(state) = &mut self.current_screen {
                    if state.user_id == section_update.session {
                        state.apply(section_update.data);
                    }
                    // A mismatched tag is a stale response from a previous
                    // session; drop it.
                }
            }
        }
    }

    /// Handles a key press. Returns true if the application should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match &mut self.current_screen {
            Screen::Splash => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return true,
                // Any other key press skips the splash screen
                _ => self.leave_splash(),
            },
            Screen::Login(form) => match key.code {
                KeyCode::Esc => return true,
                KeyCode::Enter => self.submit_login(),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    form.toggle_focus()
                }
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) => form.insert_char(c),
                _ => {}
            },
            Screen::Dashboard(_) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return true,
                KeyCode::Char('l') => self.logout(),
                _ => {}
            },
        }
        false
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        // Apply all pending state updates from background tasks
        while let Ok(update) = app.update_receiver.try_recv() {
            app.apply_update(update);
        }

        // Drain diagnostic events into the dashboard log, if one is showing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_to_activity_log(event);
            }
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash timeout transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.leave_splash();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(KEY_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Login(form) => render_login(f, form),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
