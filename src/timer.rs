use std::time::{Duration, Instant};

/// Fixed-interval gate between render frames and snake moves.
///
/// Frames may arrive as fast as the event loop polls; `poll` only lets one
/// move through per `interval`, measured from the last move that happened.
#[derive(Clone, Copy, Debug)]
pub struct MoveTimer {
    interval: Duration,
    last_move: Instant,
}

impl MoveTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last_move: now }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[cfg(test)]
    pub fn last_move(&self) -> Instant {
        self.last_move
    }

    /// Changes the cadence. The next move is still timed from `last_move`.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Returns true, and records `now` as the last move, once the interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_move) >= self.interval {
            self.last_move = now;
            true
        } else {
            false
        }
    }

    /// Starts a fresh interval at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last_move = now;
    }
}
