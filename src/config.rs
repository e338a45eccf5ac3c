//! Application-level configuration constants.

// Scheduler
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Element ids of the rendering surface
pub const CONTENT_AREA_ID: &str = "content-area";
pub const CLOCK_DISPLAY_ID: &str = "n-clock-display";
pub const DAY_LENGTH_DISPLAY_ID: &str = "n-value-display";
pub const DAY_LENGTH_SLIDER_ID: &str = "n-slider";
pub const SECONDS_TOGGLE_ID: &str = "seconds-toggle";
pub const LANGUAGE_CONTROL_ID: &str = "language-control";
