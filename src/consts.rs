pub mod ui_consts {
    //! Dashboard UI configuration constants.

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size for the state update channel.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    /// Buffer size for the diagnostic event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// How long the splash screen is shown before the first real screen.
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Key poll interval for the UI loop.
    pub const KEY_POLL_INTERVAL_MS: u64 = 100;
}
