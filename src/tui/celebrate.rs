use std::time::{Duration, Instant};

use crate::model::Stats;

/// How long the popup stays up once triggered.
pub const DISPLAY_TIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationState {
    Idle,
    Showing { until: Instant },
}

/// Drives the all-tasks-complete popup.
///
/// `observe` is fed the fresh stats after every store change and fires on the
/// rising edge of the all-complete condition. The window is fixed: nothing
/// that happens to the store while showing extends, restarts, or cuts it
/// short. `tick` runs on the event-loop clock and drops the popup once the
/// deadline passes; there is no detached timer to outlive the app.
#[derive(Debug)]
pub struct Celebration {
    state: CelebrationState,
    /// Whether the all-complete condition held at the previous observation
    was_complete: bool,
}

impl Celebration {
    pub fn new() -> Self {
        Celebration {
            state: CelebrationState::Idle,
            was_complete: false,
        }
    }

    /// Feed one observation of the store. Call after every mutation.
    pub fn observe(&mut self, stats: &Stats, now: Instant) {
        let complete = stats.all_complete();
        let rising = complete && !self.was_complete;
        self.was_complete = complete;

        if rising && self.state == CelebrationState::Idle {
            self.state = CelebrationState::Showing {
                until: now + DISPLAY_TIME,
            };
        }
    }

    /// Dismiss once the deadline passes. Called every event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        if let CelebrationState::Showing { until } = self.state
            && now >= until
        {
            self.state = CelebrationState::Idle;
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.state, CelebrationState::Showing { .. })
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Celebration::new()
    }
}
