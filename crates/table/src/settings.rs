use super::*;
use std::time::Duration;
use thou_core::*;

/// Presentation timing and layout for a session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub idle_interval: Duration,
    pub grace_hold: Duration,
    pub elimination_hold: Duration,
    pub game_over_delay: Duration,
    pub seats: SeatMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            idle_interval: IDLE_INTERVAL,
            grace_hold: GRACE_HOLD,
            elimination_hold: ELIMINATION_HOLD,
            game_over_delay: GAME_OVER_DELAY,
            seats: SeatMap::default(),
        }
    }
}

impl Settings {
    pub fn with_layout<I, S>(mut self, layout: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.seats = SeatMap::from_layout(layout);
        self
    }
    pub fn with_idle_interval(mut self, interval: Duration) -> Self {
        self.idle_interval = interval;
        self
    }
}
