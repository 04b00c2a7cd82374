use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

use crate::constants::{LOGO_CLICKS_REQUIRED, LOGO_CLICK_WINDOW_MS};

/// Detects `required` clicks inside a rolling time window.
///
/// Clicks older than the window are forgotten, so a slow series of clicks
/// never adds up to a trigger.
#[derive(Debug, Clone)]
pub struct TripleClick {
    window: Duration,
    required: usize,
    clicks: VecDeque<Instant>,
}

impl Default for TripleClick {
    fn default() -> Self {
        Self::new(Duration::from_millis(LOGO_CLICK_WINDOW_MS), LOGO_CLICKS_REQUIRED)
    }
}

impl TripleClick {
    pub fn new(window: Duration, required: usize) -> Self {
        Self {
            window,
            required: required.max(1),
            clicks: VecDeque::new(),
        }
    }

    /// Record a click at `now`. Returns true when it completes the series,
    /// in which case the counter starts over.
    pub fn register(&mut self, now: Instant) -> bool {
        while let Some(first) = self.clicks.front() {
            if now.saturating_duration_since(*first) > self.window {
                self.clicks.pop_front();
            } else {
                break;
            }
        }

        self.clicks.push_back(now);
        if self.clicks.len() >= self.required {
            self.clicks.clear();
            true
        } else {
            false
        }
    }

    /// Clicks currently counted towards the series
    pub fn pending_clicks(&self) -> usize {
        self.clicks.len()
    }

    pub fn reset(&mut self) {
        self.clicks.clear();
    }
}
