//! Constants used throughout the application
//!
//! This module centralizes timings, user-facing messages and other constant
//! values to keep them consistent between the viewer and the relay.

// Navigation timings (milliseconds)
/// Entrance animation length before the project detail page is committed
pub const PROJECT_MAIN_DELAY_MS: u64 = 800;
/// Entrance animation length before the all-projects grid is committed
pub const ALL_PROJECTS_MAIN_DELAY_MS: u64 = 600;
/// Upper bound on any loading transition
pub const SAFETY_DEADLINE_MS: u64 = 5000;
/// Selected project outlives the close animation by this long
pub const SELECTION_CLEAR_DELAY_MS: u64 = 300;
/// Delay before scrolling the home view to a requested section after a close
pub const SCROLL_AFTER_CLOSE_MS: u64 = 400;
/// Splash screen duration on startup
pub const SPLASH_DURATION_MS: u64 = 1500;

// Easter egg
pub const LOGO_CLICK_WINDOW_MS: u64 = 3000;
pub const LOGO_CLICKS_REQUIRED: usize = 3;

// Contact form
/// Success message auto-dismiss delay
pub const SUBMIT_MESSAGE_TTL_MS: u64 = 5000;
pub const RELAY_REQUEST_TIMEOUT_SECS: u64 = 15;

// Contact form messages
pub const MSG_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
pub const MSG_SUBMIT_FAILED: &str = "Failed to send message. Please try again.";
pub const MSG_RECEIVED: &str = "✅ Message received! I'll get back to you soon via email.";
pub const MSG_SENT: &str = "Message sent successfully!";

// Relay error messages
pub const ERROR_FIELDS_REQUIRED: &str = "All fields are required";
pub const ERROR_INVALID_EMAIL: &str = "Invalid email format";
pub const ERROR_SUBMISSION_FAILED: &str = "Failed to process contact form submission";
pub const ERROR_RETRIEVE_FAILED: &str = "Failed to retrieve submissions";
pub const ERROR_UNAUTHORIZED: &str = "Missing or invalid authorization";

// Notification email
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const RESEND_KEY_PREFIX: &str = "re_";
pub const SUBMISSION_ID_PREFIX: &str = "contact_";

// Error boundary
pub const ERROR_BOUNDARY_TITLE: &str = "Something went wrong";
pub const ERROR_BOUNDARY_TIMEOUT: &str = "The page took too long to load. Please check your connection and try again.";
pub const ERROR_BOUNDARY_GENERIC: &str = "We're sorry for the inconvenience. Press Ctrl+R to reload.";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Height of the footer that carries the logo
pub const FOOTER_HEIGHT: u16 = 3;
/// Number of projects shown in the home portfolio section
pub const FEATURED_PROJECT_COUNT: usize = 4;
/// Font scale bounds for the accessibility settings
pub const FONT_SCALE_MIN: f32 = 0.8;
pub const FONT_SCALE_MAX: f32 = 1.4;
pub const FONT_SCALE_STEP: f32 = 0.1;
