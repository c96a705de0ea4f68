
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production, the backend serves the bundle
}

/// Lets layout settle before the smooth-scroll engine measures the page.
pub const SMOOTH_SCROLL_INIT_DELAY_MS: u32 = 100;

/// Stand-in network latency when built with `simulated-contact`.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;

/// How long the "Message Sent" acknowledgement stays on screen.
pub const CONTACT_SUCCESS_DISMISS_MS: u32 = 5_000;

/// Scroll offset after which the navbar switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD_PX: i32 = 50;
